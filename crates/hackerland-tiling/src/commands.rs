use hackerland_ipc::IpcCommand;

/// Runtime commands accepted by [`crate::TilingManager::execute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TilingCommand {
    /// Switch to a workspace by 0-based index.
    SwitchWorkspace(usize),
    CycleLayout,
    ResizeMaster(f64),
    ToggleScratchpad,
    ToggleSticky,
    TogglePassthrough,
}

impl From<IpcCommand> for TilingCommand {
    fn from(command: IpcCommand) -> Self {
        match command {
            // The wire protocol counts workspaces from 1.
            IpcCommand::SwitchWorkspace(n) => TilingCommand::SwitchWorkspace(n.saturating_sub(1)),
            IpcCommand::ToggleScratchpad => TilingCommand::ToggleScratchpad,
            IpcCommand::ToggleSticky => TilingCommand::ToggleSticky,
            IpcCommand::CycleLayout => TilingCommand::CycleLayout,
            IpcCommand::ResizeMaster(delta) => TilingCommand::ResizeMaster(delta),
            IpcCommand::TogglePassthrough => TilingCommand::TogglePassthrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_switch_is_one_based() {
        assert_eq!(
            TilingCommand::from(IpcCommand::SwitchWorkspace(1)),
            TilingCommand::SwitchWorkspace(0)
        );
        assert_eq!(
            TilingCommand::from(IpcCommand::SwitchWorkspace(5)),
            TilingCommand::SwitchWorkspace(4)
        );
    }

    #[test]
    fn ipc_toggles_map_directly() {
        assert_eq!(
            TilingCommand::from(IpcCommand::ToggleSticky),
            TilingCommand::ToggleSticky
        );
        assert_eq!(
            TilingCommand::from(IpcCommand::ResizeMaster(-0.05)),
            TilingCommand::ResizeMaster(-0.05)
        );
    }
}
