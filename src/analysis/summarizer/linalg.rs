//! Small dense linear algebra for the LSA ranker
//!
//! The summarizer only needs the singular values and right singular vectors
//! of a words × sentences matrix. Both come from the eigen-decomposition of
//! the sentences × sentences Gram matrix `AᵀA`. The caller bounds its size,
//! so a cyclic Jacobi sweep is enough.

const MAX_SWEEPS: usize = 100;
const OFF_DIAGONAL_EPS: f64 = 1e-22;

/// Thin SVD restricted to what the ranker consumes
#[derive(Debug, Clone)]
pub(crate) struct RightSingular {
    /// Singular values, descending
    pub sigma: Vec<f64>,
    /// `v[j][k]`: component of sentence `j` on latent topic `k`
    pub v: Vec<Vec<f64>>,
}

/// Eigen-decomposition of a symmetric matrix by cyclic Jacobi rotations.
///
/// Returns `(eigenvalues, eigenvectors)` with eigenvector `k` stored in
/// column `k` of the second value.
pub(crate) fn symmetric_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for _ in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|p| (0..n).filter(move |&q| q != p).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off < OFF_DIAGONAL_EPS {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p][q];
                if apq.abs() < f64::MIN_POSITIVE {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
                let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                let t = sign / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (akp, akq) = (row[p], row[q]);
                    row[p] = c * akp - s * akq;
                    row[q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
                for row in v.iter_mut() {
                    let (vkp, vkq) = (row[p], row[q]);
                    row[p] = c * vkp - s * vkq;
                    row[q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let values = (0..n).map(|i| a[i][i]).collect();
    (values, v)
}

/// Singular values and right singular vectors of `A` from its Gram matrix
/// `AᵀA`, truncated to `rank_limit` (`min(rows, cols)` for a thin SVD).
pub(crate) fn right_singular(gram: Vec<Vec<f64>>, rank_limit: usize) -> RightSingular {
    let cols = gram.len();
    let (values, vectors) = symmetric_eigen(gram);

    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by(|&x, &y| values[y].total_cmp(&values[x]));
    order.truncate(rank_limit);

    // AᵀA 半正定，数值误差产生的负特征值截断为 0
    let sigma = order.iter().map(|&k| values[k].max(0.0).sqrt()).collect();
    let v = (0..cols)
        .map(|j| order.iter().map(|&k| vectors[j][k]).collect())
        .collect();

    RightSingular { sigma, v }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `AᵀA` for `a` with `rows × cols`
    fn gram(a: &[Vec<f64>], cols: usize) -> Vec<Vec<f64>> {
        let mut g = vec![vec![0.0; cols]; cols];
        for row in a {
            for i in 0..cols {
                let ri = row[i];
                if ri == 0.0 {
                    continue;
                }
                for j in i..cols {
                    g[i][j] += ri * row[j];
                }
            }
        }
        for i in 0..cols {
            for j in 0..i {
                g[i][j] = g[j][i];
            }
        }
        g
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_eigen_of_diagonal() {
        let (values, vectors) = symmetric_eigen(vec![vec![2.0, 0.0], vec![0.0, 5.0]]);
        assert_close(values[0], 2.0);
        assert_close(values[1], 5.0);
        assert_close(vectors[0][0].abs(), 1.0);
        assert_close(vectors[1][1].abs(), 1.0);
    }

    #[test]
    fn test_eigen_reconstructs_matrix() {
        let m = vec![
            vec![4.0, 1.0, 2.0],
            vec![1.0, 3.0, 0.5],
            vec![2.0, 0.5, 6.0],
        ];
        let (values, v) = symmetric_eigen(m.clone());
        for k in 0..3 {
            for i in 0..3 {
                let mv: f64 = (0..3).map(|j| m[i][j] * v[j][k]).sum();
                assert_close(mv, values[k] * v[i][k]);
            }
        }
    }

    #[test]
    fn test_singular_values_of_known_matrix() {
        // [[3, 0], [4, 5]] 的奇异值为 sqrt(45) 和 sqrt(5)
        let a = vec![vec![3.0, 0.0], vec![4.0, 5.0]];
        let svd = right_singular(gram(&a, 2), 2);
        assert_close(svd.sigma[0], 45f64.sqrt());
        assert_close(svd.sigma[1], 5f64.sqrt());
    }

    #[test]
    fn test_thin_svd_truncates_to_rank_limit() {
        let a = vec![vec![1.0, 2.0, 3.0]];
        let svd = right_singular(gram(&a, 3), 1);
        assert_eq!(svd.sigma.len(), 1);
        assert_close(svd.sigma[0], 14f64.sqrt());
        assert_eq!(svd.v.len(), 3);
        assert!(svd.v.iter().all(|row| row.len() == 1));
    }
}
