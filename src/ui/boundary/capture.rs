//! Converts render-phase faults, returned or panicked, into values.
//!
//! A panic inside a supervised render still runs the process panic hook.
//! The hook installed here records the panic for the boundary and skips the
//! previous hook (stderr report, terminal restore) while any boundary on this
//! thread is rendering.

use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use super::fault::{panic_message, ErrorDescriptor, RenderFault, StructuredTrace};

thread_local! {
    static SUPERVISION_PATH: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static LAST_PANIC: RefCell<Option<PanicRecord>> = const { RefCell::new(None) };
}

static INSTALL_HOOK: Once = Once::new();

struct PanicRecord {
    message: String,
    location: Option<String>,
    trace: StructuredTrace,
}

/// A fault caught during one supervised render.
pub(crate) struct CapturedFailure {
    pub error: ErrorDescriptor,
    pub trace: StructuredTrace,
}

/// Install the capturing panic hook once per process, chaining whatever hook
/// is installed at that point.
pub fn install_panic_capture() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_supervising() {
                previous(info);
                return;
            }
            let record = PanicRecord {
                message: panic_message(info.payload()),
                location: info.location().map(|location| location.to_string()),
                trace: StructuredTrace {
                    component_path: current_path(),
                    backtrace: Backtrace::force_capture().to_string(),
                },
            };
            LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(record));
        }));
    });
}

/// True while a boundary on this thread is rendering its subtree.
pub fn is_supervising() -> bool {
    SUPERVISION_PATH.with(|path| !path.borrow().is_empty())
}

fn current_path() -> Vec<String> {
    SUPERVISION_PATH.with(|path| path.borrow().clone())
}

struct PathGuard;

impl PathGuard {
    fn enter(label: &str) -> Self {
        SUPERVISION_PATH.with(|path| path.borrow_mut().push(label.to_string()));
        PathGuard
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        SUPERVISION_PATH.with(|path| {
            path.borrow_mut().pop();
        });
    }
}

/// Run `render` under boundary `label`, turning `Err` and panics into a
/// [`CapturedFailure`].
pub(crate) fn supervise<F>(label: &str, render: F) -> Result<(), CapturedFailure>
where
    F: FnOnce() -> Result<(), RenderFault>,
{
    install_panic_capture();
    LAST_PANIC.with(|slot| slot.borrow_mut().take());
    let guard = PathGuard::enter(label);
    let outcome = panic::catch_unwind(AssertUnwindSafe(render));
    let path = current_path();
    drop(guard);

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(fault)) => Err(CapturedFailure {
            error: ErrorDescriptor::from_fault(&fault),
            trace: StructuredTrace {
                component_path: path,
                backtrace: Backtrace::capture().to_string(),
            },
        }),
        Err(payload) => {
            // A record left by a panic the child caught itself belongs to
            // a different unwind.
            let message = panic_message(payload.as_ref());
            let record = LAST_PANIC
                .with(|slot| slot.borrow_mut().take())
                .filter(|record| record.message == message);
            Err(match record {
                Some(record) => CapturedFailure {
                    error: ErrorDescriptor::from_panic(payload.as_ref(), record.location),
                    trace: record.trace,
                },
                None => CapturedFailure {
                    error: ErrorDescriptor::from_panic(payload.as_ref(), None),
                    trace: StructuredTrace {
                        component_path: path,
                        backtrace: String::new(),
                    },
                },
            })
        }
    }
}
