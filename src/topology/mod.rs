/// Label/target value type: one signed 32-bit entry per output position.
/// Negative values mean "no ground truth available".
pub type Target = i32;

/// Shape of one classification head (output target).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputShape {
    pub height: usize,
    pub width: usize,
    /// Class scores produced per output position.
    pub channels: usize,
    /// Number of distinct classes this head decides between.
    pub classes: usize,
}

impl OutputShape {
    /// Number of label slots the engine writes for this target: one per
    /// output spatial position. This is the count every buffer indexed by
    /// this target must be sized to.
    pub const fn size(&self) -> usize {
        self.height * self.width
    }
}

/// Immutable description of the compiled network's fixed shapes.
///
/// Constructed once and passed by reference to the driver and engine; no
/// field changes after construction.
#[derive(Clone, Debug)]
pub struct Topology {
    input_width: usize,
    input_height: usize,
    input_channels: usize,
    targets: Vec<OutputShape>,
}

impl Topology {
    pub fn new(
        input_width: usize,
        input_height: usize,
        input_channels: usize,
        targets: Vec<OutputShape>,
    ) -> Self {
        assert!(input_width > 0 && input_height > 0 && input_channels > 0);
        assert!(!targets.is_empty(), "a network has at least one target");
        for t in &targets {
            assert!(t.height > 0 && t.width > 0 && t.channels > 0 && t.classes > 0);
        }
        Topology {
            input_width,
            input_height,
            input_channels,
            targets,
        }
    }

    /// The shape the generated MNIST export uses: 24x24 single-channel
    /// input, one 10-class target deciding a single label.
    pub fn mnist_24x24() -> Self {
        Topology::new(
            24,
            24,
            1,
            vec![OutputShape {
                height: 1,
                width: 1,
                channels: 10,
                classes: 10,
            }],
        )
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn input_height(&self) -> usize {
        self.input_height
    }

    pub fn input_channels(&self) -> usize {
        self.input_channels
    }

    /// Flattened input element count (width x height x channels).
    pub fn input_size(&self) -> usize {
        self.input_width * self.input_height * self.input_channels
    }

    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    pub fn target(&self, t: usize) -> &OutputShape {
        &self.targets[t]
    }

    /// Label slots for target `t`; buffers for that target hold exactly
    /// this many elements.
    pub fn outputs_size(&self, t: usize) -> usize {
        self.targets[t].size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnist_shapes() {
        let topo = Topology::mnist_24x24();
        assert_eq!(topo.input_size(), 24 * 24);
        assert_eq!(topo.num_targets(), 1);
        assert_eq!(topo.outputs_size(0), 1);
        assert_eq!(topo.target(0).channels, 10);
        assert_eq!(topo.target(0).classes, 10);
    }

    #[test]
    #[should_panic]
    fn rejects_empty_targets() {
        Topology::new(24, 24, 1, Vec::new());
    }
}
