//! Writing profile tables and kymographs

mod kymograph_writer;
mod npy;
mod sink;
mod table_writer;

pub use kymograph_writer::{kymograph_path, to_luma16, write_kymographs, KymographFormat};
pub use npy::{encode_npy, write_npy};
pub use sink::{compressed_path, write_output};
pub use table_writer::{to_csv, to_json, TableFormat};
