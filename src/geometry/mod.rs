pub mod hit_testing;

pub use hit_testing::{find_rule, node_contains, shape_at};
