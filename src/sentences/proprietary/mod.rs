//! # Proprietary Sentences
//!
//! One module per manufacturer, each building the [`Manufacturer`] entry that
//! the standard registry installs under its three character code.

use crate::Manufacturer;

pub mod ash;
pub mod fec;
pub mod grm;
pub mod kwd;
pub mod mgn;
pub mod mtk;
pub mod nor;
pub mod qtm;
pub mod rdi;
pub mod srf;
pub mod sxn;
pub mod tnl;
pub mod ubx;
pub mod vtx;

/// All known manufacturers.
pub fn manufacturers() -> Vec<Manufacturer> {
    vec![
        ash::manufacturer(),
        fec::manufacturer(),
        grm::manufacturer(),
        kwd::manufacturer(),
        mgn::manufacturer(),
        mtk::manufacturer(),
        nor::manufacturer(),
        qtm::manufacturer(),
        rdi::manufacturer(),
        srf::manufacturer(),
        sxn::manufacturer(),
        tnl::manufacturer(),
        ubx::manufacturer(),
        vtx::manufacturer(),
    ]
}
