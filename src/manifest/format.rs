//! Human readable size rendering used in the file list.

const KIB: u128 = 1024;

/// Render an asset size for the manifest.
///
/// Sizes below 1024 render as `"{n}/bytes"`. Larger sizes are divided by 1024,
/// rounded half up to two decimals and rendered without trailing zeros as `"{n}/kb"`.
pub fn format_size(size: usize) -> String {
  let bytes = size as u128;
  if bytes < KIB {
    return format!("{size}/bytes");
  }

  let hundredths = (bytes * 100 + KIB / 2) / KIB;
  let kib = format!("{}.{:02}", hundredths / 100, hundredths % 100);
  format!("{}/kb", trim_fraction(&kib))
}

fn trim_fraction(value: &str) -> &str {
  if !value.contains('.') {
    return value;
  }
  value.trim_end_matches('0').trim_end_matches('.')
}
