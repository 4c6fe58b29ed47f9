#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use httpsig_core::*;

#[cfg(feature = "cavage")]
pub mod cavage {
    pub use httpsig_cavage::*;
}
