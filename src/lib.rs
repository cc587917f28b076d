#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use jx_json as json;
pub use jx_reflect as reflect;
pub use jx_utils as utils;
