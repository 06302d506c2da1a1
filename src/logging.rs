use std::any::Any;
use std::ffi::OsStr;
use std::io;
use std::panic::Location;
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Installs the global subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init(log_file: Option<&Path>) {
    // Env filter: use RUST_LOG or default to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Console (stderr) layer with file/line
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    // Optional daily-rolling file layer
    let file_layer = log_file.map(|path| {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let name = path.file_name().unwrap_or(OsStr::new("blockworld.log"));
        let (nb_writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
        let _ = FILE_GUARD.set(guard);

        fmt::layer()
            .with_writer(nb_writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_level(true)
            .compact()
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        // Hook panics to log with backtrace
        std::panic::set_hook(Box::new(|info| {
            let msg = describe_panic(info.location(), info.payload());
            let bt = std::backtrace::Backtrace::force_capture();
            tracing::error!("{}\nBacktrace:\n{:?}", msg, bt);
        }));
    }
}

fn describe_panic(location: Option<&Location<'_>>, payload: &(dyn Any + Send)) -> String {
    let mut msg = String::new();
    if let Some(loc) = location {
        msg.push_str(&format!("panic at {}:{}:{} ", loc.file(), loc.line(), loc.column()));
    }

    if let Some(s) = payload.downcast_ref::<&str>() {
        msg.push_str(s);
    } else if let Some(s) = payload.downcast_ref::<String>() {
        msg.push_str(s);
    } else {
        msg.push_str("<non-string panic>");
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_are_described() {
        let here = Location::caller();
        let msg = describe_panic(Some(here), &"boom");
        assert!(msg.starts_with(&format!("panic at {}:{}:", here.file(), here.line())));
        assert!(msg.ends_with("boom"));

        assert_eq!(describe_panic(None, &String::from("owned")), "owned");
        assert_eq!(describe_panic(None, &42_u32), "<non-string panic>");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(None);
        init(None);
        tracing::info!("still logging");
    }
}
