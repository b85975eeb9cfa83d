use std::fmt;

/// Integer displayed with `'` between groups of three digits, e.g. `1'234'567`.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let head = digits.len() % 3;
        f.write_str(&digits[..head])?;
        for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
            if head != 0 || i != 0 {
                f.write_str("'")?;
            }
            // ASCII digits only
            f.write_str(std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}
