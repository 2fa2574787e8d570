//! Single-session state machine
//!
//! A `Session` is owned by exactly one control loop, which feeds it one
//! [`Action`] at a time. Every action runs to completion (scoring, grid
//! write, keyboard update, state transition and the optional save) before the
//! next one is read, so nothing here needs synchronization.

use super::{GameState, Grid, Keyboard, PlayMode, WordState};
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use crate::output::share;
use crate::save::{SaveError, SaveFile, SaveStore, Statistics};
use crate::wordlists::{Dictionary, WordSource};
use tracing::{debug, info, warn};

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type one letter
    Input(char),
    /// Remove the last typed letter
    Delete,
    /// Submit the typed letters as a guess
    Submit,
    /// Abandon this session and start the next one
    NewSession,
    /// Switch between the result summary and the statistics view
    ToggleStatistics,
    Quit,
}

impl Action {
    /// Translate one line of typed text into actions
    ///
    /// - `:new`, `:stats`, `:quit` (or `:n`, `:s`, `:q`) map to session actions
    /// - `-` deletes one letter per dash
    /// - a blank line submits whatever is already typed
    /// - anything else replaces the typed letters with its own and submits
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::game::Action;
    ///
    /// let actions = Action::parse_line("hi");
    /// assert_eq!(actions[..5], [Action::Delete; 5]);
    /// assert_eq!(actions[5..], [Action::Input('h'), Action::Input('i'), Action::Submit]);
    /// assert_eq!(Action::parse_line(":q"), [Action::Quit]);
    /// ```
    #[must_use]
    pub fn parse_line(line: &str) -> Vec<Self> {
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            ":new" | ":n" => return vec![Self::NewSession],
            ":stats" | ":s" => return vec![Self::ToggleStatistics],
            ":quit" | ":q" => return vec![Self::Quit],
            _ => {}
        }

        if line.is_empty() {
            return vec![Self::Submit];
        }
        if line.chars().all(|c| c == '-') {
            return line.chars().map(|_| Self::Delete).collect();
        }

        // A typed word stands on its own; clear leftovers of a rejected guess
        let letters = line.chars().filter(|c| !c.is_whitespace()).map(Self::Input);
        std::iter::repeat_n(Self::Delete, WORD_LENGTH)
            .chain(letters)
            .chain(std::iter::once(Self::Submit))
            .collect()
    }
}

/// What the control loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Continue,
    NewSession,
    Quit,
}

/// One puzzle being played
pub struct Session<'a> {
    mode: PlayMode,
    secret: Word,
    grid: Grid,
    keyboard: Keyboard,
    input: String,
    word_state: WordState,
    game_state: GameState,
    save: Option<SaveFile>,
    new_game: bool,
    statistics_recorded: bool,
    show_statistics: bool,
    dictionary: &'a dyn Dictionary,
    store: &'a dyn SaveStore,
}

impl<'a> Session<'a> {
    /// Start a session for `mode`, taking the secret from `words`
    pub fn start<W>(mode: PlayMode, words: &'a W, store: &'a dyn SaveStore) -> Self
    where
        W: Dictionary + WordSource,
    {
        Self::new(words.secret_for(mode), mode, words, store)
    }

    /// Start a session with an explicit secret
    ///
    /// Persistent modes load their save record first. A record for the same
    /// puzzle is resumed in place by replaying its grid; any load failure
    /// falls back to a fresh record.
    pub fn new(
        secret: Word,
        mode: PlayMode,
        dictionary: &'a dyn Dictionary,
        store: &'a dyn SaveStore,
    ) -> Self {
        let mut session = Self {
            mode,
            secret,
            grid: Grid::new(),
            keyboard: Keyboard::new(),
            input: String::with_capacity(WORD_LENGTH),
            word_state: WordState::Ok,
            game_state: GameState::Running,
            save: None,
            new_game: true,
            statistics_recorded: false,
            show_statistics: false,
            dictionary,
            store,
        };

        if mode.is_persistent() {
            let save = match store.load(mode.key()) {
                Ok(save) => save,
                Err(SaveError::NotFound(_)) => SaveFile::new(),
                Err(err) => {
                    warn!(%err, mode = mode.key(), "could not load save, starting fresh");
                    SaveFile::new()
                }
            };

            if save.is_for(mode.id()) {
                session.resume(&save);
            }
            session.save = Some(save);

            // A saved grid can end a game its status never recorded
            if session.game_state.is_terminal() {
                session.record_outcome();
            }
        }

        debug!(%mode, resumed = !session.new_game, "session started");
        session
    }

    /// Rebuild the board from a save of the same puzzle
    ///
    /// Only complete rows are replayed. Letters of a trailing partial row go
    /// back into the input buffer so the next submit starts at column zero.
    /// The game state follows the replayed grid; a terminal saved status is
    /// kept even if the grid behind it was damaged.
    fn resume(&mut self, save: &SaveFile) {
        let replayed = Grid::from_snapshot(&save.last_game_grid);
        let complete = replayed.current_row().min(save.last_game_grid.len());
        self.grid = Grid::from_snapshot(&save.last_game_grid[..complete]);

        self.input = (0..replayed.current_column())
            .filter_map(|col| replayed.get(complete, col))
            .map(|item| item.letter)
            .collect();

        for row in self.grid.rows() {
            for item in row {
                self.keyboard.update(item.letter, item.state);
            }
        }

        self.game_state = if self.grid.is_solved() {
            GameState::Won
        } else if self.grid.is_full() {
            GameState::Lost
        } else {
            save.last_game_status
        };
        if self.game_state.is_terminal() {
            self.input.clear();
        }

        self.new_game = false;
        self.statistics_recorded = save.last_game_status.is_terminal();

        if self.game_state != save.last_game_status {
            warn!(
                saved = ?save.last_game_status,
                replayed = ?self.game_state,
                "saved status disagrees with grid"
            );
        }
    }

    /// Apply one player action
    pub fn handle(&mut self, action: Action) -> Response {
        match action {
            Action::Quit => return Response::Quit,
            Action::NewSession => return Response::NewSession,
            Action::ToggleStatistics => {
                if self.game_state.is_terminal() {
                    self.show_statistics = !self.show_statistics;
                }
            }
            Action::Input(_) | Action::Delete | Action::Submit
                if self.game_state.is_terminal() => {}
            Action::Input(letter) => self.type_letter(letter),
            Action::Delete => {
                if self.input.pop().is_some() {
                    self.word_state = WordState::Ok;
                }
            }
            Action::Submit => self.submit(),
        }

        Response::Continue
    }

    fn type_letter(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() || self.input.len() >= WORD_LENGTH {
            return;
        }

        self.input.push(letter.to_ascii_uppercase());
        self.word_state = WordState::Ok;
    }

    fn submit(&mut self) {
        if self.input.len() < WORD_LENGTH {
            self.word_state = WordState::NotEnoughLetters;
            return;
        }

        let guess = match Word::new(self.input.as_str()) {
            Ok(guess) if self.dictionary.is_valid_word(guess.text()) => guess,
            _ => {
                self.word_state = WordState::NotInList;
                return;
            }
        };

        let feedback = Feedback::score(&self.secret, &guess);
        if let Err(err) = self.grid.write_row(&guess, &feedback) {
            warn!(%err, guess = guess.text(), "refused grid write");
            return;
        }

        self.word_state = WordState::Ok;
        self.keyboard.apply(&guess, &feedback);
        self.input.clear();

        if feedback.is_solved() {
            self.game_state = GameState::Won;
        } else if self.grid.current_row() >= MAX_GUESSES {
            self.game_state = GameState::Lost;
        }

        debug!(
            guess = guess.text(),
            row = self.grid.current_row(),
            state = ?self.game_state,
            "guess scored"
        );

        if self.game_state.is_terminal() {
            self.record_outcome();
        }
    }

    /// Write the finished game and updated statistics to the save store
    ///
    /// Runs at most once per session: the `statistics_recorded` guard is set
    /// before writing, so repeated calls (or a failed write) never count the
    /// same game twice. Returns whether a write succeeded.
    pub fn record_outcome(&mut self) -> bool {
        if !self.game_state.is_terminal()
            || self.statistics_recorded
            || !self.mode.is_persistent()
        {
            return false;
        }
        self.statistics_recorded = true;

        let mut save = self.save.take().unwrap_or_default();
        save.last_game_id = Some(self.mode.id());
        save.last_game_status = self.game_state;
        save.last_game_grid = self.grid.snapshot();
        save.statistics.record(self.game_state, self.grid.current_row());

        let written = match self.store.save(self.mode.key(), &save) {
            Ok(()) => {
                info!(mode = %self.mode, state = ?self.game_state, "game recorded");
                true
            }
            Err(err) => {
                warn!(%err, "could not write save");
                false
            }
        };

        self.save = Some(save);
        self.new_game = false;
        written
    }

    #[must_use]
    pub const fn mode(&self) -> PlayMode {
        self.mode
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.grid.current_row()
    }

    /// Column the next typed letter goes to
    #[must_use]
    pub fn current_column(&self) -> usize {
        self.input.len()
    }

    #[must_use]
    pub const fn word_state(&self) -> WordState {
        self.word_state
    }

    #[must_use]
    pub const fn game_state(&self) -> GameState {
        self.game_state
    }

    /// Whether this session started fresh and has not been recorded yet
    #[must_use]
    pub const fn is_new_game(&self) -> bool {
        self.new_game
    }

    #[must_use]
    pub const fn statistics_recorded(&self) -> bool {
        self.statistics_recorded
    }

    #[must_use]
    pub const fn showing_statistics(&self) -> bool {
        self.show_statistics
    }

    /// Statistics for this mode; `None` for free play
    #[must_use]
    pub fn statistics(&self) -> Option<&Statistics> {
        self.save.as_ref().map(|save| &save.statistics)
    }

    /// Share text for a finished game
    #[must_use]
    pub fn share_string(&self) -> Option<String> {
        self.game_state
            .is_terminal()
            .then(|| share::share_string(&self.mode.to_string(), &self.grid))
    }

    /// Closing message for a finished game
    #[must_use]
    pub fn final_message(&self) -> Option<String> {
        match self.game_state {
            GameState::Running => None,
            GameState::Won => Some(
                match self.grid.current_row() {
                    1 => "Genius",
                    2 => "Magnificent",
                    3 => "Impressive",
                    4 => "Splendid",
                    5 => "Great",
                    _ => "Phew",
                }
                .to_string(),
            ),
            GameState::Lost => Some(format!("The word was {}", self.secret)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::save::MemoryStore;
    use crate::wordlists::WordList;

    const DAY: PlayMode = PlayMode::Daily { day: 7 };

    fn words() -> WordList {
        WordList::new(&["broad"], &["crane", "board", "slate", "irate", "mount", "lucky"])
    }

    fn type_word(session: &mut Session, word: &str) {
        for action in Action::parse_line(word) {
            session.handle(action);
        }
    }

    #[test]
    fn typing_moves_column_and_caps_at_word_length() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        for c in "cranes".chars() {
            session.handle(Action::Input(c));
        }
        assert_eq!(session.input(), "CRANE");
        assert_eq!(session.current_column(), WORD_LENGTH);

        session.handle(Action::Delete);
        assert_eq!(session.current_column(), 4);
    }

    #[test]
    fn non_letters_ignored() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        session.handle(Action::Input('4'));
        session.handle(Action::Input(' '));
        assert_eq!(session.current_column(), 0);
    }

    #[test]
    fn delete_at_column_zero_is_noop() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        assert_eq!(session.handle(Action::Delete), Response::Continue);
        assert_eq!(session.current_column(), 0);
        assert_eq!(session.word_state(), WordState::Ok);
    }

    #[test]
    fn short_submit_is_rejected() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        session.handle(Action::Submit);
        assert_eq!(session.word_state(), WordState::NotEnoughLetters);

        type_word(&mut session, "cra");
        assert_eq!(session.word_state(), WordState::NotEnoughLetters);
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.input(), "CRA");
        assert_eq!(session.game_state(), GameState::Running);
    }

    #[test]
    fn unknown_word_is_rejected_then_cleared() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "xxxxx");
        assert_eq!(session.word_state(), WordState::NotInList);
        assert_eq!(session.current_row(), 0);
        assert!(session.grid().get(0, 0).is_none());

        session.handle(Action::Delete);
        assert_eq!(session.word_state(), WordState::Ok);
    }

    #[test]
    fn accepted_guess_writes_row_and_keyboard() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "crane");
        assert_eq!(session.word_state(), WordState::Ok);
        assert_eq!(session.current_row(), 1);
        assert_eq!(session.current_column(), 0);
        assert_eq!(session.keyboard().state('R'), LetterState::Correct);
        assert_eq!(session.keyboard().state('A'), LetterState::Present);
        assert_eq!(session.keyboard().state('C'), LetterState::Absent);
        assert_eq!(session.game_state(), GameState::Running);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn winning_records_once() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "broad");
        assert_eq!(session.game_state(), GameState::Won);
        assert!(session.statistics_recorded());
        assert_eq!(store.writes(), 1);

        assert!(!session.record_outcome());
        assert!(!session.record_outcome());
        assert_eq!(store.writes(), 1);

        let stats = store.get("daily").unwrap().statistics;
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins_in(1), 1);
        assert_eq!(session.final_message().as_deref(), Some("Genius"));
    }

    #[test]
    fn terminal_session_ignores_grid_input() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "broad");
        let grid = session.grid().clone();

        type_word(&mut session, "crane");
        session.handle(Action::Delete);
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.input(), "");
        assert_eq!(session.game_state(), GameState::Won);
    }

    #[test]
    fn six_misses_lose() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        for guess in ["crane", "slate", "irate", "mount", "lucky"] {
            type_word(&mut session, guess);
            assert_eq!(session.game_state(), GameState::Running);
        }
        type_word(&mut session, "board");

        assert_eq!(session.game_state(), GameState::Lost);
        assert_eq!(session.current_row(), MAX_GUESSES);
        assert_eq!(
            session.final_message().as_deref(),
            Some("The word was BROAD")
        );

        let stats = store.get("daily").unwrap().statistics;
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        for guess in ["crane", "slate", "irate", "mount", "lucky", "broad"] {
            type_word(&mut session, guess);
        }
        assert_eq!(session.game_state(), GameState::Won);
        assert_eq!(store.get("daily").unwrap().statistics.wins_in(6), 1);
    }

    #[test]
    fn toggle_statistics_only_when_terminal() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        session.handle(Action::ToggleStatistics);
        assert!(!session.showing_statistics());

        type_word(&mut session, "broad");
        session.handle(Action::ToggleStatistics);
        assert!(session.showing_statistics());
        session.handle(Action::ToggleStatistics);
        assert!(!session.showing_statistics());
    }

    #[test]
    fn session_level_responses() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        assert_eq!(session.handle(Action::NewSession), Response::NewSession);
        assert_eq!(session.handle(Action::Quit), Response::Quit);
    }

    #[test]
    fn random_mode_never_saves() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(PlayMode::Random { seed: 1 }, &words, &store);

        type_word(&mut session, "broad");
        assert_eq!(session.game_state(), GameState::Won);
        assert!(session.statistics().is_none());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn failed_save_keeps_result_and_does_not_retry() {
        let words = words();
        let store = MemoryStore::read_only();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "broad");
        assert_eq!(session.game_state(), GameState::Won);
        assert!(session.statistics_recorded());
        assert!(!session.record_outcome());
        assert_eq!(session.statistics().unwrap().games_played, 1);
    }

    #[test]
    fn resume_same_day_restores_finished_game() {
        let words = words();
        let store = MemoryStore::new();
        {
            let mut session = Session::start(DAY, &words, &store);
            type_word(&mut session, "crane");
            type_word(&mut session, "broad");
        }

        let mut resumed = Session::start(DAY, &words, &store);
        assert!(!resumed.is_new_game());
        assert_eq!(resumed.game_state(), GameState::Won);
        assert_eq!(resumed.current_row(), 2);
        assert_eq!(resumed.keyboard().state('B'), LetterState::Correct);
        assert!(!resumed.record_outcome());
        assert_eq!(store.writes(), 1);
    }

    fn running_save(grid: &Grid) -> MemoryStore {
        let mut save = SaveFile::new();
        save.last_game_id = Some(DAY.id());
        save.last_game_status = GameState::Running;
        save.last_game_grid = grid.snapshot();

        let store = MemoryStore::new();
        store.save(DAY.key(), &save).unwrap();
        store
    }

    #[test]
    fn running_save_with_full_grid_resumes_as_lost() {
        let words = words();
        let miss = Word::new("crane").unwrap();
        let feedback = Feedback::score(&Word::new("broad").unwrap(), &miss);
        let mut grid = Grid::new();
        for _ in 0..MAX_GUESSES {
            grid.write_row(&miss, &feedback).unwrap();
        }
        let store = running_save(&grid);

        let mut session = Session::start(DAY, &words, &store);
        assert_eq!(session.game_state(), GameState::Lost);
        assert_eq!(session.current_row(), MAX_GUESSES);

        // The unrecorded loss is counted exactly once
        assert_eq!(store.writes(), 2);
        assert_eq!(store.get("daily").unwrap().statistics.games_played, 1);
        assert!(!session.record_outcome());

        type_word(&mut session, "broad");
        assert_eq!(session.game_state(), GameState::Lost);
    }

    #[test]
    fn running_save_with_solved_row_resumes_as_won() {
        let words = words();
        let mut grid = Grid::new();
        grid.write_row(&Word::new("broad").unwrap(), &Feedback::SOLVED)
            .unwrap();
        let store = running_save(&grid);

        let session = Session::start(DAY, &words, &store);
        assert_eq!(session.game_state(), GameState::Won);
        assert_eq!(store.get("daily").unwrap().statistics.wins_in(1), 1);
    }

    #[test]
    fn partial_row_in_save_returns_to_input() {
        let words = words();
        let secret = Word::new("broad").unwrap();
        let first = Word::new("crane").unwrap();
        let mut grid = Grid::new();
        grid.write_row(&first, &Feedback::score(&secret, &first))
            .unwrap();
        for (col, letter) in "SLA".chars().enumerate() {
            grid.set_cell(1, col, letter, LetterState::Absent).unwrap();
        }
        let store = running_save(&grid);

        let mut session = Session::start(DAY, &words, &store);
        assert!(!session.is_new_game());
        assert_eq!(session.game_state(), GameState::Running);
        assert_eq!(session.current_row(), 1);
        assert_eq!(session.grid().current_column(), 0);
        assert_eq!(session.input(), "SLA");
        assert!(session.grid().get(1, 0).is_none());

        type_word(&mut session, "broad");
        assert_eq!(session.word_state(), WordState::Ok);
        assert_eq!(session.current_row(), 2);
        assert_eq!(session.game_state(), GameState::Won);
        assert_eq!(store.get("daily").unwrap().statistics.wins_in(2), 1);
    }

    #[test]
    fn new_day_starts_fresh_but_keeps_statistics() {
        let words = words();
        let store = MemoryStore::new();
        {
            let mut session = Session::start(DAY, &words, &store);
            type_word(&mut session, "broad");
        }

        let next_day = PlayMode::Daily { day: 8 };
        let session = Session::start(next_day, &words, &store);
        assert!(session.is_new_game());
        assert_eq!(session.game_state(), GameState::Running);
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.statistics().unwrap().games_played, 1);
    }

    #[test]
    fn parse_line_commands() {
        assert_eq!(Action::parse_line(" :NEW "), [Action::NewSession]);
        assert_eq!(Action::parse_line(":stats"), [Action::ToggleStatistics]);
        assert_eq!(Action::parse_line("--"), [Action::Delete, Action::Delete]);
        assert_eq!(Action::parse_line(""), [Action::Submit]);
        assert_eq!(Action::parse_line("ab").len(), WORD_LENGTH + 3);
    }

    #[test]
    fn rejected_guess_does_not_leak_into_next_line() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "cranx");
        assert_eq!(session.word_state(), WordState::NotInList);
        assert_eq!(session.input(), "CRANX");

        type_word(&mut session, "broad");
        assert_eq!(session.current_row(), 1);
        assert_eq!(session.game_state(), GameState::Won);
    }

    #[test]
    fn short_guess_is_replaced_by_next_line() {
        let words = words();
        let store = MemoryStore::new();
        let mut session = Session::start(DAY, &words, &store);

        type_word(&mut session, "cr");
        assert_eq!(session.word_state(), WordState::NotEnoughLetters);

        type_word(&mut session, "crane");
        assert_eq!(session.word_state(), WordState::Ok);
        assert_eq!(session.current_row(), 1);
    }
}
