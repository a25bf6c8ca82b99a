/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Purchase and warranty dates carry no time component.
pub type Date = chrono::NaiveDate;
