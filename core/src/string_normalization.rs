/// Trims a typed name and collapses runs of whitespace to single spaces.
/// Case is left alone; the store compares case-insensitively.
pub fn clean_name(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
