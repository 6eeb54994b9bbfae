use super::SweepKind;

/// One completed optimizer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    /// Concrete setting of the swept quantity for this run
    pub parameter_value: f64,
    /// Which predefined configuration step the run belongs to
    pub parameter_index: i64,
    /// Best solution value before optimization started
    pub initial_fitness: f64,
    /// Best solution value at the end of the run
    pub top_fitness: f64,
}

/// All runs of a single sweep, in file order.
///
/// Tables are never mutated after loading; reporters derive new values from them.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable {
    kind: SweepKind,
    rows: Vec<ResultRow>,
}

impl SweepTable {
    pub fn new(kind: SweepKind, rows: Vec<ResultRow>) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> SweepKind {
        self.kind
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The three sweep tables of one experiment, loaded once and shared by both reporters.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSet {
    tables: [SweepTable; 3],
}

impl SweepSet {
    /// Build a set from one table per sweep. Tables are re-ordered to `SweepKind::ALL` order.
    ///
    /// Returns `None` if a sweep is missing or duplicated.
    pub fn from_tables(tables: Vec<SweepTable>) -> Option<Self> {
        let mut slots: [Option<SweepTable>; 3] = [None, None, None];
        for table in tables {
            let slot = &mut slots[table.kind().index()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(table);
        }
        let [ants, p_rate, evaporation] = slots;
        Some(Self {
            tables: [ants?, p_rate?, evaporation?],
        })
    }

    pub fn get(&self, kind: SweepKind) -> &SweepTable {
        &self.tables[kind.index()]
    }

    /// Iterate tables in `SweepKind::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &SweepTable> {
        self.tables.iter()
    }

    /// Total number of runs across all sweeps
    pub fn total_runs(&self) -> usize {
        self.tables.iter().map(SweepTable::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(kind: SweepKind) -> SweepTable {
        SweepTable::new(
            kind,
            vec![ResultRow {
                parameter_value: 1.0,
                parameter_index: 1,
                initial_fitness: 10.0,
                top_fitness: 20.0,
            }],
        )
    }

    #[test]
    fn test_sweep_set_orders_tables() {
        let set = SweepSet::from_tables(vec![
            table(SweepKind::EvaporationRate),
            table(SweepKind::NumberOfAnts),
            table(SweepKind::PRate),
        ])
        .unwrap();

        let kinds: Vec<_> = set.iter().map(SweepTable::kind).collect();
        assert_eq!(kinds, SweepKind::ALL.to_vec());
        assert_eq!(set.total_runs(), 3);
    }

    #[test]
    fn test_sweep_set_rejects_duplicates_and_gaps() {
        assert!(
            SweepSet::from_tables(vec![
                table(SweepKind::PRate),
                table(SweepKind::PRate),
                table(SweepKind::NumberOfAnts),
            ])
            .is_none()
        );
        assert!(SweepSet::from_tables(vec![table(SweepKind::PRate)]).is_none());
    }
}
