use mrelbp_core::{Error, Image, Result};

/// Count every value of `mapped` into `max_bin + 1` bins.
///
/// # Errors
/// [`Error::Algorithm`] if a value exceeds `max_bin`.
pub fn histogram(mapped: &Image<u32>, max_bin: u32) -> Result<Vec<u64>> {
    let mut counts = vec![0u64; max_bin as usize + 1];
    for &value in mapped.data().iter() {
        let bin = counts.get_mut(value as usize).ok_or_else(|| {
            Error::Algorithm(format!("mapped value {} exceeds max bin {}", value, max_bin))
        })?;
        *bin += 1;
    }
    Ok(counts)
}
