use crate::common::HandLandmark;

/// Fingers in the fixed order used by [`ExtensionVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
    ];

    pub fn tip(self) -> HandLandmark {
        match self {
            Self::Thumb => HandLandmark::ThumbTip,
            Self::Index => HandLandmark::IndexTip,
            Self::Middle => HandLandmark::MiddleTip,
            Self::Ring => HandLandmark::RingTip,
            Self::Pinky => HandLandmark::PinkyTip,
        }
    }

    /// Joint the tip is compared against: the MCP for the thumb, otherwise
    /// the PIP, which sits two indices before the tip.
    pub fn reference_joint(self) -> HandLandmark {
        match self {
            Self::Thumb => HandLandmark::ThumbMcp,
            _ => HandLandmark::ALL[self.tip().index() - 2],
        }
    }
}

/// Which fingers are extended, ordered thumb, index, middle, ring, pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtensionVector([bool; 5]);

impl ExtensionVector {
    pub fn new(extended: [bool; 5]) -> Self {
        Self(extended)
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    /// Open palm.
    pub fn all_extended(&self) -> bool {
        self.0.iter().all(|&extended| extended)
    }

    /// Thumb and pinky out, the three middle fingers curled.
    pub fn is_hang_loose(&self) -> bool {
        self.is_extended(Finger::Thumb)
            && self.is_extended(Finger::Pinky)
            && !self.is_extended(Finger::Index)
            && !self.is_extended(Finger::Middle)
            && !self.is_extended(Finger::Ring)
    }
}
