use fp_lir::{Result, Value};

use crate::{interp_bail, interp_ensure};

/// Local value slots of one activation of an interpreted function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    slots: Vec<Value>,
}

impl Frame {
    pub fn new(slots: Vec<Value>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Result<Value> {
        match self.slots.get(slot) {
            Some(value) => Ok(*value),
            None => interp_bail!(format!(
                "read of slot {} in a frame with {} slots",
                slot,
                self.slots.len()
            )),
        }
    }

    pub fn set(&mut self, slot: usize, value: Value) -> Result<()> {
        interp_ensure!(
            slot < self.slots.len(),
            format!("write of slot {} in a frame with {} slots", slot, self.slots.len())
        );
        self.slots[slot] = value;
        Ok(())
    }
}

impl From<Vec<Value>> for Frame {
    fn from(slots: Vec<Value>) -> Self {
        Frame::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_access_is_an_evaluation_error() {
        let mut frame = Frame::new(vec![Value::Int32(1)]);
        assert!(frame.get(1).is_err());
        assert!(frame.set(3, Value::Int32(2)).is_err());

        frame.set(0, Value::Int32(2)).unwrap();
        assert_eq!(frame.get(0).unwrap(), Value::Int32(2));
    }
}
