/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the pixel buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: usize, height: usize) -> Result<(), crate::PpmError> {
        if let Some(max_w) = self.max_width {
            if width as u64 > max_w {
                return Err(crate::PpmError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height as u64 > max_h {
                return Err(crate::PpmError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = (width as u64).saturating_mul(height as u64);
            if pixels > max_px {
                return Err(crate::PpmError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::PpmError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::PpmError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PpmError;

    #[test]
    fn unlimited_by_default() {
        let limits = Limits::default();
        assert!(limits.check(usize::MAX, 1).is_ok());
        assert!(limits.check_memory(usize::MAX).is_ok());
    }

    #[test]
    fn width_limit() {
        let limits = Limits {
            max_width: Some(10),
            ..Default::default()
        };
        assert!(limits.check(10, 1000).is_ok());
        assert!(matches!(
            limits.check(11, 1),
            Err(PpmError::LimitExceeded(_))
        ));
    }

    #[test]
    fn pixel_and_memory_limits() {
        let limits = Limits {
            max_pixels: Some(100),
            max_memory_bytes: Some(300),
            ..Default::default()
        };
        assert!(limits.check(10, 10).is_ok());
        assert!(limits.check(10, 11).is_err());
        assert!(limits.check_memory(300).is_ok());
        assert!(limits.check_memory(301).is_err());
    }
}
