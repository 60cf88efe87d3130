use std::fmt::{Debug, Display};

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are signed primitive integers, e.g. alignment scores that can go below zero
pub trait PrimSInt: PrimInt + ::num::Signed + Display {}

impl<T: PrimInt + ::num::Signed + Display> PrimSInt for T {}
