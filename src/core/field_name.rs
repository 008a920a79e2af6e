/// Human-readable form of a field identifier for generated messages.
///
/// `emailAddress` becomes `Email Address`, `user_name` becomes `User Name`.
/// A space goes before every ASCII uppercase letter and underscores become
/// spaces; the words between single spaces are then capitalised.
pub fn format_field_name(field: &str) -> String {
    let mut spaced = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        match c {
            'A'..='Z' => {
                spaced.push(' ');
                spaced.push(c);
            }
            '_' => spaced.push(' '),
            _ => spaced.push(c),
        }
    }

    spaced
        .trim()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_splits_into_words() {
        assert_eq!(format_field_name("emailAddress"), "Email Address");
        assert_eq!(format_field_name("dateOfBirth"), "Date Of Birth");
    }

    #[test]
    fn snake_case_splits_into_words() {
        assert_eq!(format_field_name("user_name"), "User Name");
    }

    #[test]
    fn single_word_is_capitalised() {
        assert_eq!(format_field_name("email"), "Email");
        assert_eq!(format_field_name("PHONE"), "P H O N E");
    }

    #[test]
    fn leading_capital_does_not_leave_a_gap() {
        assert_eq!(format_field_name("FirstName"), "First Name");
        assert_eq!(format_field_name("_private"), "Private");
    }

    #[test]
    fn repeated_separators_keep_empty_words() {
        assert_eq!(format_field_name("a__b"), "A  B");
    }
}
