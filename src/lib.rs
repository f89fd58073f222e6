#![no_std]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::alloc_instead_of_core,
    clippy::arithmetic_side_effects,
    clippy::mod_module_files,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

mod algorithm;
mod error;
mod key;
mod mpint;
mod signature;

pub mod pkcs1;
pub mod pkcs8;
pub mod private;
pub mod public;

pub use crate::{
    algorithm::Algorithm,
    error::{Error, ImportCause, Result},
    key::{Key, KeyMaterial},
    mpint::Mpint,
    private::KeypairData,
    public::KeyData,
    signature::Signature,
};
pub use encoding::{Decode, Encode, Reader, Writer};
