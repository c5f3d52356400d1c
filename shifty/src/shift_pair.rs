use heapless::index_map::FnvIndexMap;
use shifty_types::keycode::HidKeyCode;
use shifty_types::shift_pair::ShiftPair;

/// Max number of shift pairs, must be a power of 2
pub const SHIFT_PAIR_MAX_NUM: usize = 16;

/// Errors of building a [`ShiftPairTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftPairError {
    /// Another pair is already triggered by this key
    Duplicate(HidKeyCode),
    /// The key can't trigger a pair: `No` or a modifier key
    InvalidTrigger(HidKeyCode),
    /// The table already holds [`SHIFT_PAIR_MAX_NUM`] pairs
    Full,
}

/// Shift pairs indexed by the base keycode of their `normal` key
#[derive(Clone, Debug)]
pub struct ShiftPairTable {
    pairs: FnvIndexMap<HidKeyCode, ShiftPair, SHIFT_PAIR_MAX_NUM>,
}

impl Default for ShiftPairTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftPairTable {
    pub fn new() -> Self {
        Self {
            pairs: FnvIndexMap::new(),
        }
    }

    /// Build a table from `pairs`, rejecting the first invalid or duplicated one
    pub fn from_pairs(pairs: &[ShiftPair]) -> Result<Self, ShiftPairError> {
        let mut table = Self::new();
        for pair in pairs {
            table.insert(*pair)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, pair: ShiftPair) -> Result<(), ShiftPairError> {
        let trigger = pair.trigger();
        if trigger == HidKeyCode::No || trigger.is_modifier() {
            return Err(ShiftPairError::InvalidTrigger(trigger));
        }
        if self.pairs.contains_key(&trigger) {
            return Err(ShiftPairError::Duplicate(trigger));
        }
        self.pairs.insert(trigger, pair).map_err(|_| ShiftPairError::Full)?;
        Ok(())
    }

    /// The pair triggered by `key`
    pub fn get(&self, key: HidKeyCode) -> Option<&ShiftPair> {
        self.pairs.get(&key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ShiftPair> {
        self.pairs.values()
    }
}
