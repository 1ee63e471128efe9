//! DOM score display and win banner

use game_core::{Presenter, Score, Side};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const HIDDEN: &str = "hidden";

pub struct DomPresenter {
    player1_score: Element,
    player2_score: Element,
    win_message: Element,
}

impl DomPresenter {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("Missing #{} element", id)))
        };
        Ok(Self {
            player1_score: find("player1Score")?,
            player2_score: find("player2Score")?,
            win_message: find("winMessage")?,
        })
    }

    /// Clear the board for a new game
    pub fn reset(&mut self) {
        self.score_updated(Score::new());
        if let Err(e) = self.win_message.class_list().add_1(HIDDEN) {
            log::warn!("Failed to hide win message: {:?}", e);
        }
    }
}

impl Presenter for DomPresenter {
    fn score_updated(&mut self, score: Score) {
        self.player1_score
            .set_text_content(Some(&score.get(Side::Left).to_string()));
        self.player2_score
            .set_text_content(Some(&score.get(Side::Right).to_string()));
    }

    fn game_won(&mut self, winner: Side) {
        log::info!("Showing win banner for {:?}", winner);
        if let Err(e) = self.win_message.class_list().remove_1(HIDDEN) {
            log::warn!("Failed to show win message: {:?}", e);
        }
    }
}
