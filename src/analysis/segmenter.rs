//! Sentence segmentation
//!
//! Two policies are supported because the two summarizers work at different
//! granularities:
//! - [`SegmentationPolicy::TerminalPunctuation`]: a sentence ends after a run
//!   of `.`, `!` or `?` followed by whitespace or the end of the text. Used by
//!   the LSA ranker.
//! - [`SegmentationPolicy::PeriodSpace`]: split on the literal `". "` and
//!   nothing else. Text without a trailing delimiter stays one sentence and
//!   abbreviations over-split; the length summarizer depends on exactly this.
//!
//! Both yield a lazy, cloneable (hence restartable) iterator of `&str`.

/// Which splitting rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationPolicy {
    #[default]
    TerminalPunctuation,
    PeriodSpace,
}

/// Split `text` into sentences using `policy`
pub fn split_sentences(text: &str, policy: SegmentationPolicy) -> Sentences<'_> {
    let inner = match policy {
        SegmentationPolicy::TerminalPunctuation => Inner::Terminal { rest: text },
        SegmentationPolicy::PeriodSpace => Inner::PeriodSpace(text.split(". ")),
    };
    Sentences { inner }
}

/// Lazy sentence iterator returned by [`split_sentences`]
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    inner: Inner<'a>,
}

#[derive(Debug, Clone)]
enum Inner<'a> {
    Terminal { rest: &'a str },
    PeriodSpace(std::str::Split<'a, &'static str>),
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Byte offset just past the first sentence terminator in `text`,
/// or `text.len()` when the text has none.
fn terminal_boundary(text: &str) -> usize {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        // 吞掉连续的标点（"?!"、"..."）
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        match chars.peek() {
            None => return end,
            Some(&(_, next)) if next.is_whitespace() => return end,
            _ => {}
        }
    }
    text.len()
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::PeriodSpace(split) => split.next(),
            Inner::Terminal { rest } => loop {
                let text = rest.trim_start();
                if text.is_empty() {
                    *rest = "";
                    return None;
                }
                let end = terminal_boundary(text);
                let sentence = text[..end].trim();
                *rest = &text[end..];
                if !sentence.is_empty() {
                    return Some(sentence);
                }
            },
        }
    }
}
