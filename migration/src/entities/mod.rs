pub mod analysis_record;

pub use analysis_record::Entity as AnalysisRecordEntity;
