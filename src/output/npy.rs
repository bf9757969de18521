//! NumPy `.npy` (format 1.0) encoding of `f64` matrices

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use ndarray::ArrayView2;

use crate::errors::KymoResult;

const MAGIC: &[u8] = b"\x93NUMPY";
const ALIGNMENT: usize = 64;

/// Writes `array` as a little-endian, C-ordered `<f8` array
pub fn write_npy<W: Write>(writer: &mut W, array: ArrayView2<'_, f64>) -> KymoResult<()> {
    let (rows, cols) = array.dim();
    let mut header = format!("{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, {}), }}", rows, cols);

    // magic + version + u16 length, then the dict padded so data starts aligned
    let preamble = MAGIC.len() + 2 + 2;
    let padding = ALIGNMENT - (preamble + header.len() + 1) % ALIGNMENT;
    header.push_str(&" ".repeat(padding % ALIGNMENT));
    header.push('\n');

    writer.write_all(MAGIC)?;
    writer.write_u8(1)?;
    writer.write_u8(0)?;
    writer.write_u16::<LittleEndian>(header.len() as u16)?;
    writer.write_all(header.as_bytes())?;

    for &value in array.iter() {
        writer.write_f64::<LittleEndian>(value)?;
    }
    Ok(())
}

pub fn encode_npy(array: ArrayView2<'_, f64>) -> KymoResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(128 + array.len() * 8);
    write_npy(&mut bytes, array)?;
    Ok(bytes)
}
