//! Rule checks, one module per defect category

pub mod alt_text;
pub mod aria;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod keyboard;
