use log::info;

use crate::domain::ProfileUser;

/// Edit-profile form; only the name fields are editable
///
/// The form exists only while it is open: saving consumes it and
/// cancelling is dropping it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileEditor {
    /// Seed the form with the user's current names
    pub fn open(user: &ProfileUser) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    /// Write the edited names back; email, points and rank are left alone
    pub fn save(self, user: &mut ProfileUser) {
        user.first_name = self.first_name;
        user.last_name = self.last_name;
        info!("Saved profile for {}", user.full_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> ProfileUser {
        ProfileUser {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john@example.com".to_string(),
            total_points: 900,
            overall_rank: 3,
            ..ProfileUser::default()
        }
    }

    #[test]
    fn test_save_updates_names_only() {
        let mut user = user();
        let mut editor = ProfileEditor::open(&user);
        editor.first_name = "Johnny".to_string();
        editor.last_name = "Smyth".to_string();

        editor.save(&mut user);

        assert_eq!(user.full_name(), "Johnny Smyth");
        assert_eq!(user.email, "john@example.com");
        assert_eq!((user.total_points, user.overall_rank), (900, 3));
    }

    #[test]
    fn test_open_seeds_current_names() {
        let user = user();

        let editor = ProfileEditor::open(&user);

        assert_eq!((editor.first_name.as_str(), editor.last_name.as_str()), ("John", "Smith"));
    }
}
