use crate::imports::*;

/*
    Types:
    * Stager - Orchestrates one staging pass: split -> classify -> write every
      group list through the injected store. Also the read side for consumers
      that want a group's commands back without re-parsing.
*/

pub struct Stager {
    command_type: CommandType,
    store: Arc<dyn CommandStore>,
}

impl Stager {
    pub fn new(command_type: CommandType, store: Arc<dyn CommandStore>) -> Self {
        Stager {
            command_type,
            store,
        }
    }

    pub fn in_memory(command_type: CommandType) -> Self {
        Self::new(command_type, Arc::new(MemoryStore::new()))
    }

    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    pub fn store(&self) -> &Arc<dyn CommandStore> {
        &self.store
    }

    /// Runs a full staging pass over `text`. All six group lists are written,
    /// empty ones included; the previous pass's lists are replaced wholesale.
    /// A store failure fails the whole pass - callers must not treat a failed
    /// pass as complete, though writes that already settled are not rolled
    /// back.
    #[tracing::instrument(skip(self, text), err, fields(command_type = ?self.command_type))]
    pub async fn stage(&self, text: &str) -> Result<StageReport> {
        let items = split_script(text);
        tracing::debug!(item_count = items.len(), "Split script into items");

        let Classification { commands, dropped } = classify(&items, self.command_type);
        let counts: HashMap<GroupType, usize> = commands
            .iter()
            .map(|(group, list)| (group, list.len()))
            .collect();

        // Each group key is independent, so the six writes are issued
        // together; all of them must settle before the pass counts as done.
        tokio::try_join!(
            self.put_group(&commands, GroupType::PreSql),
            self.put_group(&commands, GroupType::PreProdSql),
            self.put_group(&commands, GroupType::CountSql),
            self.put_group(&commands, GroupType::SelectSql),
            self.put_group(&commands, GroupType::MainSql),
            self.put_group(&commands, GroupType::PostSql),
        )?;

        tracing::debug!(
            stored = commands.total(),
            dropped = dropped.total(),
            "Staged script"
        );
        Ok(StageReport { counts, dropped })
    }

    async fn put_group(&self, commands: &GroupedCommands, group: GroupType) -> Result<()> {
        let list = commands.commands(group);
        let value = serde_json::to_value(list)
            .with_context(|| format!("Failed to encode {group} command list"))?;
        let key = command_key(group);
        self.store
            .put(&key, value)
            .await
            .with_context(|| format!("Failed to store command list under '{key}'"))
    }

    /// Reads a group's command list back from the store. `Ok(None)` means no
    /// pass has written the key yet - distinct from `Ok(Some(vec![]))`, a
    /// completed pass that found nothing for the group.
    pub async fn commands(&self, group: GroupType) -> Result<Option<Vec<Command>>> {
        let key = command_key(group);
        let value = self
            .store
            .get(&key)
            .await
            .with_context(|| format!("Failed to read command list under '{key}'"))?;
        match value {
            Some(value) => {
                let list: Vec<Command> = serde_json::from_value(value)
                    .with_context(|| format!("Malformed command list under '{key}'"))?;
                Ok(Some(list))
            }
            None => Ok(None),
        }
    }

    pub async fn reset(&self) -> Result<()> {
        self.store
            .clear()
            .await
            .context("Failed to clear command store")
    }
}
