use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Instant;

use invitation_core::image_set::ImageSet;
use invitation_core::preload::preload_with_progress;

use crate::messages::{WorkerCommand, WorkerResult};

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("invitation-preload".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Preload {
                generation,
                images,
                max_side,
            } => {
                handle_preload(generation, &images, max_side, &tx, &ctx);
            }
        }
    }
}

fn handle_preload(
    generation: u64,
    images: &ImageSet,
    max_side: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let total = images.len();
    let done = AtomicUsize::new(0);

    send(
        tx,
        ctx,
        WorkerResult::Progress {
            generation,
            items_done: 0,
            items_total: total,
        },
    );

    let results = preload_with_progress(images, Some(max_side), |_| {
        let items_done = done.fetch_add(1, Ordering::Relaxed) + 1;
        send(
            tx,
            ctx,
            WorkerResult::Progress {
                generation,
                items_done,
                items_total: total,
            },
        );
    });

    let mut decoded = 0;
    for slot in results {
        match slot.result {
            Ok(photo) => {
                decoded += 1;
                send(
                    tx,
                    ctx,
                    WorkerResult::PhotoDecoded {
                        generation,
                        index: slot.index,
                        photo,
                    },
                );
            }
            Err(e) => send(
                tx,
                ctx,
                WorkerResult::Error {
                    message: format!("{}: {e}", slot.path.display()),
                },
            ),
        }
    }

    send(
        tx,
        ctx,
        WorkerResult::PreloadComplete {
            generation,
            decoded,
            total,
            elapsed: start.elapsed(),
        },
    );
}
