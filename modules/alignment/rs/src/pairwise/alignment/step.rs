use std::borrow::Borrow;

use derive_getters::{Dissolve, Getters};
use itertools::Itertools;

use crate::{Error, Result};

use super::op::Op;

/// A run of identical alignment operations
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: usize,
    /// The alignment operation
    op: Op,
}

impl Step {
    pub fn new(op: Op, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyStep);
        }
        Ok(Self { len, op })
    }

    /// Run-length encode a column-by-column list of operations.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Step> {
        ops.into_iter()
            .dedup_with_count()
            .map(|(len, op)| Step { len, op })
            .collect()
    }

    /// Merge adjacent steps with identical operations in place.
    pub fn collapse(steps: &mut Vec<Step>) {
        if steps.len() < 2 {
            return;
        }

        let mut writep = 0;
        for readp in 1..steps.len() {
            if steps[writep].op == steps[readp].op {
                steps[writep].len += steps[readp].len;
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step>>) -> String {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }

    /// Number of symbols consumed from the first and the second sequence.
    pub fn consumes(&self) -> (usize, usize) {
        self.op.consumes(self.len)
    }

    /// The same step with the roles of the sequences swapped.
    pub fn transposed(&self) -> Self {
        Self {
            len: self.len,
            op: self.op.transposed(),
        }
    }
}
