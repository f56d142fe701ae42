pub mod driver;
pub mod feature_report;
pub mod hid_report;
#[cfg(test)]
mod hid_report_test;
pub mod report_descriptor;
