//! Builders for numbered filename sets

/// Builder for generating the filename lists a frame renderer would leave
/// behind: a fixed prefix and suffix around a zero-padded counter, with one
/// or more inclusive ranges so gaps can be staged deliberately.
#[derive(Debug, Clone)]
pub struct FrameSetBuilder {
    prefix: String,
    suffix: String,
    padding: usize,
    ranges: Vec<(u64, u64)>,
}

impl FrameSetBuilder {
    /// Create a builder for names of the shape `<prefix><counter><suffix>`.
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            padding: 4,
            ranges: Vec::new(),
        }
    }

    /// Set the zero-padding width of the counter; 0 leaves it unpadded.
    pub fn with_padding(mut self, width: usize) -> Self {
        self.padding = width;
        self
    }

    /// Add an inclusive frame range. Ranges are emitted in the order they
    /// were added, so a gap is simply two ranges that do not touch.
    pub fn with_range(mut self, start: u64, end: u64) -> Self {
        self.ranges.push((start, end));
        self
    }

    /// Generate the filename list.
    pub fn build(&self) -> Vec<String> {
        let mut names = Vec::new();
        for &(start, end) in &self.ranges {
            for value in start..=end {
                names.push(format!(
                    "{}{:0width$}{}",
                    self.prefix,
                    value,
                    self.suffix,
                    width = self.padding
                ));
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_padded_frames() {
        let names = FrameSetBuilder::new("d.", ".png").with_range(1, 3).build();
        assert_eq!(names, vec!["d.0001.png", "d.0002.png", "d.0003.png"]);
    }

    #[test]
    fn test_builds_gapped_frames() {
        let names = FrameSetBuilder::new("f.", ".rgb")
            .with_padding(0)
            .with_range(101, 102)
            .with_range(104, 105)
            .build();
        assert_eq!(
            names,
            vec!["f.101.rgb", "f.102.rgb", "f.104.rgb", "f.105.rgb"]
        );
    }

    #[test]
    fn test_empty_builder_builds_nothing() {
        assert!(FrameSetBuilder::new("a", ".exr").build().is_empty());
    }
}
