// src/game.rs
//! 1ゲーム分の状態をまとめて持つ `GameState` だよ！🎮
//!
//! 盤面 (`Board`)・ドラッグの状態・勝敗・設定を全部ここで持って、
//! マウス操作を受け取ったら各ハンドラとシステムに仕事を振り分けるんだ。
//! ブラウザには依存しないので、ネイティブのテストからそのまま動かせるよ。

use log::{error, info};
use rand::Rng;

use crate::app::drag_apply_handler::{self, MoveReport};
use crate::app::drag_handler::{DragController, DragOutcome, PressOutcome};
use crate::app::event_handler::{self, ClickTarget};
use crate::app::renderer::{self, RenderSnapshot};
use crate::app::stock_handler::{self, StockAction};
use crate::board::Board;
use crate::components::{Card, DraggingInfo, GameStatus, Position, Stack, StackType};
use crate::config::GameConfig;
use crate::error::Result;
use crate::logic::auto_move;
use crate::logic::deck::Deck;
use crate::logic::rules::check_win_condition;
use crate::systems::{DealInitialCardsSystem, System, WinConditionSystem};

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    drag: DragController,
    status: GameStatus,
}

impl GameState {
    /// シャッフルして配り終わった新しいゲームを作る。
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    /// 乱数生成器を指定して新しいゲームを作る。テストではシード付きの `StdRng` を渡すよ。
    pub fn new_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let deck = Deck::shuffled_with(rng, &config.back_style);
        let mut state = Self {
            config,
            board: Board::new(deck),
            drag: DragController::new(),
            status: GameStatus::Playing,
        };
        DealInitialCardsSystem.run(&mut state)?;
        info!("GameState: new game dealt ({} cards)", state.total_card_count());
        Ok(state)
    }

    /// 同じ設定で最初からやり直す。
    pub fn new_game(&mut self) -> Result<()> {
        *self = Self::new(self.config.clone())?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn stack(&self, stack_type: StackType) -> Result<&Stack> {
        self.board.stack(stack_type)
    }

    pub fn stack_mut(&mut self, stack_type: StackType) -> Result<&mut Stack> {
        self.board.stack_mut(stack_type)
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.board.all_cards()
    }

    pub fn total_card_count(&self) -> usize {
        self.board.total_card_count()
    }

    /// 4つの組札が全部 13 枚になっているか。
    pub fn is_win(&self) -> bool {
        check_win_condition(self.board.foundation_sizes())
    }

    pub fn drag_session(&self) -> Option<&DraggingInfo> {
        self.drag.session()
    }

    /// マウスを押したとき。山札の場所なら、めくる/戻すもここでやるよ。
    pub fn press(&mut self, pointer: Position) -> Result<PressOutcome> {
        let outcome = self.drag.press(&self.board, &self.config, pointer)?;
        if outcome == PressOutcome::StockClicked {
            self.draw_or_recycle()?;
        }
        Ok(outcome)
    }

    /// ドラッグ中の移動。ドラッグしてなければ false。
    pub fn drag_to(&mut self, pointer: Position) -> bool {
        self.drag.drag_to(pointer)
    }

    /// マウスを離したとき。移動が確定したら勝利判定もする。
    pub fn release(&mut self, pointer: Position) -> Result<DragOutcome> {
        let outcome = self.drag.release(&mut self.board, &self.config, pointer).map_err(|e| {
            error!("GameState: drag release failed: {}", e);
            e
        })?;
        if let DragOutcome::Committed(_) = outcome {
            WinConditionSystem.run(self)?;
        }
        Ok(outcome)
    }

    /// ドラッグを途中でやめる (盤面はそのまま)。
    pub fn cancel_drag(&mut self) -> Option<DraggingInfo> {
        self.drag.cancel()
    }

    /// 山札をクリックしたときの処理。ドラッグ中は何もしないよ。
    pub fn draw_or_recycle(&mut self) -> Result<StockAction> {
        if self.drag.is_dragging() {
            return Ok(StockAction::Nothing);
        }
        stock_handler::draw_or_recycle(&mut self.board)
    }

    /// ダブルクリックされた表向きの一番上のカードを、置ける組札へ自動で送る。
    /// 送れたら移動先を返すよ。
    pub fn double_click(&mut self, pointer: Position) -> Result<Option<StackType>> {
        if self.drag.is_dragging() {
            return Ok(None);
        }
        let Some(ClickTarget::Card { stack_type, index }) =
            event_handler::find_topmost_face_up_card(&self.board, &self.config.layout, pointer)
        else {
            return Ok(None);
        };
        if matches!(stack_type, StackType::Foundation(_)) {
            return Ok(None);
        }

        let stack = self.board.stack(stack_type)?;
        if index + 1 != stack.len() {
            return Ok(None);
        }
        let Some(card) = stack.peek_top() else {
            return Ok(None);
        };
        let Some(target) = auto_move::find_automatic_foundation_move(&self.board, card) else {
            return Ok(None);
        };

        let report: MoveReport = drag_apply_handler::apply_move(&mut self.board, stack_type, index, target)?;
        info!("GameState: auto-moved {} card(s) {:?} -> {:?}", report.moved, report.from, report.to);
        WinConditionSystem.run(self)?;
        Ok(Some(target))
    }

    /// 今の画面を描くためのデータを作る。
    pub fn render_snapshot(&self) -> RenderSnapshot {
        renderer::build_render_snapshot(self)
    }
}
