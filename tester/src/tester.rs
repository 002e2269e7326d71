use std::{
    fmt::{Debug, Write},
    marker::PhantomData,
};

use linked_list::Stack;
use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

mod traits;
pub use traits::*;

/// Runs `ops` generated operations against a fresh `S` and checks every
/// outcome against the `Vec` reference.
///
/// A `None` seed draws one from the thread rng; the seed used is reported in
/// the failure so the run can be repeated.
pub fn test_stack<S, T, R>(
    seed: Option<R::Seed>,
    ops: usize,
) -> Result<(), OperationFailure<S, T, R>>
where
    S: Stack<T> + Debug,
    T: Clone + PartialEq + Debug,
    R: SeedableRng + Rng,
    R::Seed: Clone + Debug,
    Standard: Distribution<T>,
    Standard: Distribution<R::Seed>,
{
    let (seed, mut gen) = match seed {
        Some(seed) => (seed.clone(), StackOperationGenerator::<T, R>::from_seed(seed)),
        None => StackOperationGenerator::<T, R>::random(),
    };
    let mut target = S::new();

    for op_num in 1..=ops {
        let Some((op, res)) = gen.next() else {
            break;
        };
        let actual = op.apply(&mut target);
        if actual != res {
            let operations: Vec<_> = StackOperationGenerator::<T, R>::from_seed(seed.clone())
                .take(op_num)
                .collect();
            return Err(OperationFailure {
                seed,
                target,
                op_num,
                operations,
                actual,
                data: gen.data(),
                marker: PhantomData,
            });
        }
    }
    Ok(())
}

pub struct OperationFailure<S, T, R>
where
    R: SeedableRng,
{
    pub seed: R::Seed,
    pub target: S,
    /// 1-based index of the operation that disagreed
    pub op_num: usize,
    pub operations: Vec<(StackOperation<T>, StackOutcome<T>)>,
    pub actual: StackOutcome<T>,
    /// reference state after the failing operation
    pub data: Vec<T>,
    marker: PhantomData<R>,
}

impl<S, T, R> OperationFailure<S, T, R>
where
    S: Debug,
    T: Debug,
    R: SeedableRng,
    R::Seed: Debug,
{
    /// Describes the last few operations leading up to the mismatch.
    pub fn playback(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "seed: {:?}", self.seed);
        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, res)) in self.operations.iter().enumerate().skip(lower) {
            let _ = writeln!(out, "--------- operation {} ----------", ind + 1);
            let _ = writeln!(out, "operation: {op:?}");
            let _ = writeln!(out, "expected: {res:?}");
        }
        let _ = writeln!(out, "actual: {:?}", self.actual);
        let _ = writeln!(out, "target_state: {:?}", self.target);
        let _ = writeln!(out, "reference_state: {:?}", self.data);
        out
    }
}
