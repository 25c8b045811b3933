#![cfg(feature = "csr")]

use std::cell::Cell;
use std::rc::Rc;

use any_spawner::Executor;
use kiro_landing::dom::{live_scopes, scope_stats, use_motion};
use kiro_landing::motion::Scope;
use leptos::prelude::*;
use pretty_assertions::assert_eq;

/// Lets queued effects run.
async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

#[tokio::test]
async fn use_motion_tears_down_every_scope_it_sets_up() {
    let _ = Executor::init_tokio();

    tokio::task::LocalSet::new()
        .run_until(async {
            let setups = Rc::new(Cell::new(0usize));
            let teardowns = Rc::new(Cell::new(0usize));
            let before = scope_stats();

            let owner = Owner::new();
            let target = owner.with(|| {
                let target = RwSignal::new(Some(()));
                let setups = Rc::clone(&setups);
                let teardowns = Rc::clone(&teardowns);
                use_motion(
                    move || target.get(),
                    move |_: &(), scope: &mut Scope| {
                        setups.set(setups.get() + 1);
                        let teardowns = Rc::clone(&teardowns);
                        scope.defer(move || teardowns.set(teardowns.get() + 1));
                    },
                );
                target
            });

            settle().await;
            assert_eq!((setups.get(), teardowns.get()), (1, 0));
            assert_eq!(live_scopes(), 1);

            // Target goes away: the old scope is reverted, nothing new is set up.
            target.set(None);
            settle().await;
            assert_eq!((setups.get(), teardowns.get()), (1, 1));
            assert_eq!(live_scopes(), 0);

            // Target comes back twice: each rerun reverts before setting up again.
            target.set(Some(()));
            settle().await;
            target.set(Some(()));
            settle().await;
            assert_eq!(setups.get(), teardowns.get() + 1);
            assert_eq!(live_scopes(), 1);

            owner.cleanup();
            assert_eq!(setups.get(), teardowns.get());
            assert_eq!(live_scopes(), 0);

            let after = scope_stats();
            assert_eq!(after.attached - before.attached, setups.get());
            assert_eq!(after.disposers_run - before.disposers_run, teardowns.get());
        })
        .await;
}
