//! Configuration lookup port trait.

pub trait ConfigPort {
    fn get(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Option<i64>;
}
