//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the detector:
//! - The unified [`error::app_error::AppError`] and its result alias
//! - The [`error::kind::ErrorKind`] classification used to pick HTTP statuses
//!
//! Only things whose meaning is identical in `auth` and `analysis` belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
