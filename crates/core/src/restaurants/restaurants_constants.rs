/// Benefit availability policy codes as stored in the database.
pub mod policy_codes {
    pub const ALWAYS: &str = "ALWAYS";
    pub const NEVER: &str = "NEVER";
    pub const WEEKDAYS: &str = "WEEKDAYS";
}
