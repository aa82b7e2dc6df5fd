use folio_kernel::prelude::*;
use std::time::Duration;

#[test]
fn modal_transition_mounts_for_exit_animation_then_unmounts() {
    let mut modal = Transition::new(false, TransitionOptions::mount_on_demand(Duration::from_millis(300)));
    assert_eq!(modal.class_names("Modal"), "");
    assert!(!modal.is_mounted());

    let enter = modal.set_in(true).expect("show starts enter");
    assert_eq!(modal.class_names("Modal"), "Modal-enter Modal-enter-active");
    modal.complete(enter);

    let exit = modal.set_in(false).expect("hide starts exit");
    assert!(modal.is_mounted());
    assert_eq!(modal.class_names("Modal"), "Modal-exit Modal-exit-active");

    modal.complete(exit);
    assert_eq!(modal.phase(), TransitionPhase::Unmounted);
}

#[test]
fn reopening_during_exit_cancels_the_pending_unmount() {
    let mut modal = Transition::new(false, TransitionOptions::mount_on_demand(Duration::from_millis(300)));
    let enter = modal.set_in(true).expect("enter");
    modal.complete(enter);
    let exit = modal.set_in(false).expect("exit");
    let reenter = modal.set_in(true).expect("re-enter");

    assert!(!modal.complete(exit), "exit timer is stale");
    assert!(modal.is_mounted());
    assert!(modal.complete(reenter));
    assert_eq!(modal.phase(), TransitionPhase::Entered);
}

#[test]
fn overlay_stack_tracks_dialog_lifecycle() {
    let mut stack = OverlayStack::new();
    let dialog = stack.reserve();
    let toast = stack.reserve();

    stack.place(toast, "toast").ok();
    stack.place(dialog, "dialog").ok();
    assert_eq!(stack.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![dialog, toast]);

    stack.clear(dialog);
    assert_eq!(stack.len(), 1);
    stack.release(toast);
    assert!(stack.is_empty());
    assert!(dialog.get() < toast.get());
}
