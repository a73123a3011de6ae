//! The "new detection" form.

use thiserror::Error;

use anticheat_store::NewRecord;
use anticheat_types::{detection, WalletAddress};

/// Characters of the encoded score shown in the form preview.
pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("game id is required")]
    MissingGameId,

    #[error("cheat score is required")]
    MissingScore,
}

/// Field values of the creation form.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRecordForm {
    pub game_id: String,
    pub detection_type: String,
    pub cheat_score: f64,
}

impl Default for NewRecordForm {
    fn default() -> Self {
        Self {
            game_id: String::new(),
            detection_type: detection::default_detection_type().to_string(),
            cheat_score: 0.0,
        }
    }
}

impl NewRecordForm {
    /// A score of zero (or an unparsable entry) counts as not filled in.
    fn has_score(&self) -> bool {
        self.cheat_score != 0.0 && self.cheat_score.is_finite()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.game_id.is_empty() {
            return Err(FormError::MissingGameId);
        }
        if !self.has_score() {
            return Err(FormError::MissingScore);
        }
        Ok(())
    }

    /// Validate and build the store input for `player`.
    pub fn to_new_record(&self, player: WalletAddress) -> Result<NewRecord, FormError> {
        self.validate()?;
        Ok(NewRecord {
            player_address: player,
            game_id: self.game_id.clone(),
            detection_type: self.detection_type.clone(),
            score: self.cheat_score,
        })
    }

    /// Truncated encoded score shown while typing, if a score is entered.
    pub fn encrypted_preview(&self) -> Option<String> {
        self.has_score().then(|| {
            anticheat_crypto::preview(&anticheat_crypto::encode(self.cheat_score), PREVIEW_CHARS)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewRecordForm {
        NewRecordForm {
            game_id: "Arena".into(),
            detection_type: "Aimbot".into(),
            cheat_score: 42.0,
        }
    }

    #[test]
    fn defaults() {
        let form = NewRecordForm::default();
        assert_eq!(form.detection_type, "Speed Hack");
        assert_eq!(form.validate(), Err(FormError::MissingGameId));
        assert_eq!(form.encrypted_preview(), None);
    }

    #[test]
    fn requires_game_id_and_nonzero_score() {
        assert!(filled().validate().is_ok());

        let no_game = NewRecordForm { game_id: String::new(), ..filled() };
        assert_eq!(no_game.validate(), Err(FormError::MissingGameId));

        let zero = NewRecordForm { cheat_score: 0.0, ..filled() };
        assert_eq!(zero.validate(), Err(FormError::MissingScore));

        let nan = NewRecordForm { cheat_score: f64::NAN, ..filled() };
        assert_eq!(nan.validate(), Err(FormError::MissingScore));
    }

    #[test]
    fn builds_store_input() {
        let input = filled().to_new_record(WalletAddress::new("0xabc")).unwrap();
        assert_eq!(input.game_id, "Arena");
        assert_eq!(input.score, 42.0);
        assert_eq!(input.player_address, WalletAddress::new("0xabc"));
    }

    #[test]
    fn preview_shows_token() {
        assert_eq!(filled().encrypted_preview().as_deref(), Some("FHE-NDI="));
    }
}
