pub mod html;
pub mod notice;
pub mod test_utils;
