/// Sum of `a` and `b`.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub trait Aquarium {
    fn has_whale(&self) -> bool;
}

/// The stock aquarium. There is always a whale.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tank;

impl Aquarium for Tank {
    fn has_whale(&self) -> bool {
        true
    }
}
