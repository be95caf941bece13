pub mod contractor;
pub mod work_permit;
