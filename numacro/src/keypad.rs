use core::cell::RefCell;
use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal_async::delay::DelayNs;

use crate::behavior::{KeyAction, KeyBehavior};
use crate::channel::{FORWARD_CHANNEL, KEY_EVENT_CHANNEL};
use crate::config::KeypadConfig;
use crate::driver::{DisplaySink, LedStripDriver, ResetRequester, TextEntry};
use crate::error::KeypadError;
use crate::event::{ForwardedKey, KeyEvent};
use crate::light::LightingController;
use crate::restart::{RestartSequencer, RestartState};

/// Routes key events to the key behaviors and drives the lighting animation.
///
/// Behavior keys are handled here, regular keys are forwarded to [`FORWARD_CHANNEL`].
pub struct Keypad<'a, L, D, R, C, const ROW: usize, const COL: usize>
where
    L: LedStripDriver,
    D: DisplaySink,
    R: ResetRequester,
    C: DelayNs,
{
    keymap: &'a [[KeyAction; COL]; ROW],
    display: &'a RefCell<D>,
    splash: &'static [TextEntry<'static>],
    refresh_interval: Duration,
    lighting: LightingController<'a, L>,
    restart: RestartSequencer<'a, L, D, R, C>,
}

impl<'a, L, D, R, C, const ROW: usize, const COL: usize> Keypad<'a, L, D, R, C, ROW, COL>
where
    L: LedStripDriver,
    D: DisplaySink,
    R: ResetRequester,
    C: DelayNs,
{
    pub fn new(
        keymap: &'a [[KeyAction; COL]; ROW],
        config: KeypadConfig,
        strip: &'a RefCell<L>,
        display: &'a RefCell<D>,
        reset: &'a RefCell<R>,
        clock: C,
    ) -> Self {
        Self {
            keymap,
            display,
            splash: config.display.splash,
            refresh_interval: config.light.refresh_interval,
            lighting: LightingController::new(strip, &config.light),
            restart: RestartSequencer::new(strip, display, reset, clock, config.restart),
        }
    }

    pub fn lighting(&self) -> &LightingController<'a, L> {
        &self.lighting
    }

    pub fn restart(&self) -> &RestartSequencer<'a, L, D, R, C> {
        &self.restart
    }

    /// Show the idle screen
    pub fn show_splash(&mut self) -> Result<(), D::Error> {
        self.display.borrow_mut().render(self.splash)
    }

    /// Handle one key event.
    ///
    /// When the restart countdown fails, the splash screen is shown again
    /// before the error is returned.
    pub async fn process_event(&mut self, event: KeyEvent) -> Result<(), KeypadError<L::Error, D::Error>> {
        let Some(action) = self
            .keymap
            .get(event.row as usize)
            .and_then(|row| row.get(event.col as usize))
            .copied()
        else {
            warn!("Key event out of keymap: {:?}", event);
            return Ok(());
        };

        debug!("Processing {:?} for {:?}", action, event);
        match action {
            KeyAction::No => Ok(()),
            KeyAction::PassThrough(code) => {
                let key = ForwardedKey {
                    code,
                    row: event.row,
                    col: event.col,
                    pressed: event.pressed,
                };
                if FORWARD_CHANNEL.try_send(key).is_err() {
                    error!("Forward channel is full, dropping {:?}", key);
                }
                Ok(())
            }
            KeyAction::ToggleLighting => dispatch(&mut self.lighting, event.pressed)
                .await
                .map_err(KeypadError::Led),
            KeyAction::Restart => {
                let result = dispatch(&mut self.restart, event.pressed).await;
                if !event.pressed {
                    // The red warning is gone, the lighting mode owns the strip again
                    self.lighting.redraw();
                    if result.is_err() && self.show_splash().is_err() {
                        error!("Failed to restore the splash screen");
                    }
                }
                result
            }
        }
    }

    /// Keypad task: shows the splash screen, then processes key events from
    /// [`KEY_EVENT_CHANNEL`] and steps the lighting animation between them.
    ///
    /// Returns only when a collaborator fails.
    pub async fn run(&mut self) -> Result<Infallible, KeypadError<L::Error, D::Error>> {
        self.show_splash().map_err(KeypadError::Display)?;

        let mut last = Instant::now();
        loop {
            let elapsed = last.elapsed();
            match select(
                Timer::after(
                    self.refresh_interval
                        .checked_sub(elapsed)
                        .unwrap_or(Duration::MIN),
                ),
                KEY_EVENT_CHANNEL.receive(),
            )
            .await
            {
                Either::First(_) => {
                    // An armed restart key keeps its red warning on the strip
                    if self.restart.state() != RestartState::Armed {
                        self.lighting.animate().map_err(KeypadError::Led)?;
                    }
                    last = Instant::now();
                }
                Either::Second(event) => self.process_event(event).await?,
            }
        }
    }
}

async fn dispatch<B: KeyBehavior>(behavior: &mut B, pressed: bool) -> Result<(), B::Error> {
    if pressed {
        behavior.on_press().await
    } else {
        behavior.on_release().await
    }
}
