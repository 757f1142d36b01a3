use log::info;

use crate::domain::ProfileUser;
use crate::profile::ProfileEditor;
use crate::projection::points_history_by_date;
use crate::store::{load_or_default, RecordSource};
use crate::views::{display_date, PointsRow, ProfileView};

pub struct ProfileScreen {
    user: ProfileUser,
    editor: Option<ProfileEditor>,
}

impl ProfileScreen {
    pub async fn load<S: RecordSource>(source: &S) -> Self {
        let mut user = load_or_default("profile", source.profile()).await.user;
        user.tournament_points = points_history_by_date(&user.tournament_points);
        info!("Profile: {} tournament results", user.tournament_points.len());
        Self { user, editor: None }
    }

    pub fn user(&self) -> &ProfileUser {
        &self.user
    }

    pub fn edit(&mut self) -> &mut ProfileEditor {
        let user = &self.user;
        self.editor.get_or_insert_with(|| ProfileEditor::open(user))
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Apply the open form, if any, and close it
    pub fn save_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.save(&mut self.user);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            name: self.user.full_name(),
            email: self.user.email.clone(),
            avatar: self.user.avatar.clone(),
            total_points: self.user.total_points,
            overall_rank: self.user.overall_rank,
            tournament_points: self
                .user
                .tournament_points
                .iter()
                .map(|r| PointsRow {
                    tournament: r.tournament.clone(),
                    points: r.points,
                    rank: r.rank,
                    date: display_date(&r.date),
                })
                .collect(),
        }
    }
}
