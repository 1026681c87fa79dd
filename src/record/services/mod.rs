//! Application services for maintenance record orchestration.

mod query;

pub use query::{
    CreateRecordRequest, RecordQueryError, RecordQueryResult, RecordQueryService,
    UpdateRecordRequest,
};
