mod types;

pub use types::{CompanyMetadata, EnrichedLead, FundingStage, Person, PersonMetadata};
