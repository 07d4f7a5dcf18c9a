use crate::channel::RESET_SIGNAL;

/// One-shot request to restart the device.
pub trait ResetRequester {
    fn request_reset(&mut self);
}

/// Hands the reset over to the host firmware through [`RESET_SIGNAL`].
///
/// Use it when something else, e.g. the matrix task, has to finish before the reboot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalReset;

impl ResetRequester for SignalReset {
    fn request_reset(&mut self) {
        info!("Reset requested");
        RESET_SIGNAL.signal(());
    }
}

/// Resets the MCU right away.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemReset;

impl ResetRequester for SystemReset {
    fn request_reset(&mut self) {
        reboot_keyboard();
    }
}

pub(crate) fn reboot_keyboard() {
    warn!("Rebooting keyboard!");
    // For cortex-m:
    #[cfg(all(
        target_arch = "arm",
        target_os = "none",
        any(target_abi = "eabi", target_abi = "eabihf")
    ))]
    cortex_m::peripheral::SCB::sys_reset();

    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    error!("System reset is not supported on this target");
}
