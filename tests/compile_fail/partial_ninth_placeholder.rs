//! Test that there is no ninth placeholder token.

fn pair(first: i32, second: i32) -> (i32, i32) {
    (first, second)
}

fn main() {
    let _ = funclib::partial!(pair, _9, 1);
}
