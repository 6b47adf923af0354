pub mod calculations;
pub mod models;

pub use calculations::calculators::{
    RequestError, TaxRequest, pph15, pph17, pph17_nppn, pph21, pph22, pph23, pph26,
    pph_final_umkm, ppn,
};
pub use models::*;
