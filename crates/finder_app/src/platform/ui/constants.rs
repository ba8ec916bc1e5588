pub const APP_TITLE: &str = "Review Finder: search & extract";
pub const RULE_WIDTH: usize = 80;
pub const BANNER_RULE_WIDTH: usize = 50;
pub const RULE_CHAR: char = '=';
pub const UNKNOWN_LABEL: &str = "N/A";
