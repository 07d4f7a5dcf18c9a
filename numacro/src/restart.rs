//! Restart key with an on-screen countdown.
//!
//! Pressing the key arms it and turns the strip red. Releasing it plays a
//! countdown that reveals the restart message on the display, then asks the
//! host to reset the device. Once the countdown has started it can't be aborted.

use core::cell::RefCell;

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::behavior::KeyBehavior;
use crate::color::Color;
use crate::config::RestartConfig;
use crate::driver::{DisplaySink, LedStripDriver, ResetRequester};
use crate::error::KeypadError;

/// Number of frames of a countdown, the last one shows the whole message
pub const COUNTDOWN_FRAMES: usize = 10;
/// Max length of the countdown message in bytes, longer messages are cut
pub const MAX_MESSAGE_LEN: usize = 32;

const _: () = assert!(COUNTDOWN_FRAMES > 0, "A countdown needs at least one frame");

/// One step of the countdown
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownFrame {
    pub text: String<MAX_MESSAGE_LEN>,
    /// How long the frame stays before the next one
    pub hold: Duration,
}

/// Frames of a countdown, built on the fly from the config.
///
/// Frame `i` of `COUNTDOWN_FRAMES` reveals `i * len / COUNTDOWN_FRAMES` characters of
/// the message, the rest is filled with the padding character. The last frame
/// reveals the whole message and holds for `final_hold`.
pub struct CountdownFrames<'a> {
    config: &'a RestartConfig,
    len: usize,
    index: usize,
}

impl<'a> CountdownFrames<'a> {
    pub fn new(config: &'a RestartConfig) -> Self {
        Self {
            config,
            len: config.message.chars().count(),
            index: 0,
        }
    }
}

impl Iterator for CountdownFrames<'_> {
    type Item = CountdownFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= COUNTDOWN_FRAMES {
            return None;
        }
        self.index += 1;

        let last = self.index == COUNTDOWN_FRAMES;
        let revealed = if last {
            self.len
        } else {
            self.index * self.len / COUNTDOWN_FRAMES
        };

        let mut text = String::new();
        let chars = self
            .config
            .message
            .chars()
            .take(revealed)
            .chain(core::iter::repeat(self.config.padding).take(self.len - revealed));
        for c in chars {
            if text.push(c).is_err() {
                break;
            }
        }

        Some(CountdownFrame {
            text,
            hold: if last {
                self.config.final_hold
            } else {
                self.config.frame_hold
            },
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = COUNTDOWN_FRAMES - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountdownFrames<'_> {}

/// Byte length of the longest frame `config` can produce, before cutting
fn longest_frame_len(config: &RestartConfig) -> usize {
    let len = config.message.chars().count();
    let pad = config.padding.len_utf8();
    config
        .message
        .char_indices()
        .enumerate()
        .map(|(i, (offset, c))| offset + c.len_utf8() + (len - i - 1) * pad)
        .fold(len * pad, usize::max)
}

/// State of the restart key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RestartState {
    Idle,
    /// Pressed, the strip shows the red warning
    Armed,
    /// Released, the countdown is running
    Counting,
    /// The reset has been requested
    ResetRequested,
}

/// Result of a release of the restart key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RestartOutcome {
    /// The countdown completed and the reset was requested
    ResetRequested,
    /// The key wasn't armed by a press, nothing happened
    NotArmed,
}

pub struct RestartSequencer<'a, L, D, R, C>
where
    L: LedStripDriver,
    D: DisplaySink,
    R: ResetRequester,
    C: DelayNs,
{
    strip: &'a RefCell<L>,
    display: &'a RefCell<D>,
    reset: &'a RefCell<R>,
    clock: C,
    config: RestartConfig,
    state: RestartState,
}

impl<'a, L, D, R, C> RestartSequencer<'a, L, D, R, C>
where
    L: LedStripDriver,
    D: DisplaySink,
    R: ResetRequester,
    C: DelayNs,
{
    pub fn new(
        strip: &'a RefCell<L>,
        display: &'a RefCell<D>,
        reset: &'a RefCell<R>,
        clock: C,
        config: RestartConfig,
    ) -> Self {
        if longest_frame_len(&config) > MAX_MESSAGE_LEN {
            warn!(
                "Restart countdown frames exceed {} bytes and will be cut",
                MAX_MESSAGE_LEN
            );
        }
        Self {
            strip,
            display,
            reset,
            clock,
            config,
            state: RestartState::Idle,
        }
    }

    pub fn state(&self) -> RestartState {
        self.state
    }

    /// Arm the key and show the red warning on the strip.
    pub fn on_press(&mut self) -> Result<(), L::Error> {
        debug!("Restart key armed");
        self.state = RestartState::Armed;
        self.strip.borrow_mut().fill(Color::RED)
    }

    /// Run the countdown and request the reset.
    ///
    /// The reset is requested only after the last frame and its hold. If a
    /// collaborator fails, the error is returned and no reset is requested.
    pub async fn on_release(&mut self) -> Result<RestartOutcome, KeypadError<L::Error, D::Error>> {
        if self.state != RestartState::Armed {
            if self.config.require_arm {
                warn!("Restart key released without being pressed, ignored");
                return Ok(RestartOutcome::NotArmed);
            }
            warn!("Restart key released without being pressed");
        }

        self.state = RestartState::Counting;
        match self.count_down().await {
            Ok(()) => {
                self.state = RestartState::ResetRequested;
                info!("Countdown finished, requesting reset");
                self.reset.borrow_mut().request_reset();
                Ok(RestartOutcome::ResetRequested)
            }
            Err(e) => {
                error!("Restart countdown aborted");
                self.state = RestartState::Idle;
                Err(e)
            }
        }
    }

    async fn count_down(&mut self) -> Result<(), KeypadError<L::Error, D::Error>> {
        self.strip.borrow_mut().fill(Color::RED).map_err(KeypadError::Led)?;

        let config = &self.config;
        for frame in CountdownFrames::new(config) {
            self.display
                .borrow_mut()
                .clear_and_show(&frame.text, config.x, config.y, config.x_anchor, config.y_anchor)
                .map_err(KeypadError::Display)?;
            let hold = u32::try_from(frame.hold.as_millis()).unwrap_or(u32::MAX);
            self.clock.delay_ms(hold).await;
        }
        Ok(())
    }
}

impl<L, D, R, C> KeyBehavior for RestartSequencer<'_, L, D, R, C>
where
    L: LedStripDriver,
    D: DisplaySink,
    R: ResetRequester,
    C: DelayNs,
{
    type Error = KeypadError<L::Error, D::Error>;

    async fn on_press(&mut self) -> Result<(), Self::Error> {
        RestartSequencer::on_press(self).map_err(KeypadError::Led)
    }

    async fn on_release(&mut self) -> Result<(), Self::Error> {
        RestartSequencer::on_release(self).await.map(|_| ())
    }
}
