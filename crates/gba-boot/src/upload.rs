use crate::error::BootError;
use crate::host::EmulatorModule;
use futures::channel::oneshot;

/// Upload `rom` and wait for the module's completion callback.
///
/// There is no timeout: a module that holds on to the callback without calling
/// it leaves this future pending forever. A module that drops it unfired fails
/// the upload.
pub async fn upload_and_wait<M: EmulatorModule>(
    module: &M,
    rom: M::Rom,
    file_name: &str,
) -> Result<(), BootError> {
    let (tx, rx) = oneshot::channel();

    module.upload_rom(
        rom,
        file_name,
        Box::new(move || {
            let _ = tx.send(());
        }),
    )?;

    rx.await.map_err(|_| {
        BootError::Upload(format!(
            "completion callback for `{}` was dropped without firing",
            file_name
        ))
    })
}
