use chrono::{DateTime, Utc};
use shared::domain::{ColorTag, Substance, SubstanceId, SubstanceKind};

struct StarterSubstance {
    id: &'static str,
    symbol: &'static str,
    name: &'static str,
    description: &'static str,
    color: ColorTag,
}

const fn starter(
    id: &'static str,
    symbol: &'static str,
    name: &'static str,
    description: &'static str,
    color: ColorTag,
) -> StarterSubstance {
    StarterSubstance {
        id,
        symbol,
        name,
        description,
        color,
    }
}

static STARTERS: &[StarterSubstance] = &[
    // non-metals
    starter("h", "H₂", "氢气", "宇宙中最丰富的元素，高度易燃。", ColorTag::Cyan),
    starter("o", "O₂", "氧气", "生命之源，助燃剂。", ColorTag::Blue),
    starter("c", "C", "碳", "有机化学的基础，形式多样。", ColorTag::Slate),
    starter("n", "N₂", "氮气", "空气的主要成分，性质稳定。", ColorTag::Indigo),
    starter("cl", "Cl₂", "氯气", "黄绿色有毒气体，强氧化性。", ColorTag::Green),
    starter("s", "S", "硫", "淡黄色固体，易燃，用于制造火药。", ColorTag::Yellow),
    starter("p", "P", "磷", "有白磷（剧毒易燃）和红磷等同素异形体。", ColorTag::Red),
    starter("si", "Si", "硅", "半导体材料的核心，地壳中含量第二。", ColorTag::Stone),
    starter("i", "I₂", "碘", "紫黑色固体，遇淀粉变蓝，易升华。", ColorTag::Purple),
    // metals
    starter("na", "Na", "钠", "质软的碱金属，遇水剧烈反应。", ColorTag::Stone),
    starter("k", "K", "钾", "比钠更活泼的碱金属，紫色火焰反应。", ColorTag::Purple),
    starter("mg", "Mg", "镁", "燃烧时发出耀眼白光。", ColorTag::Slate),
    starter("al", "Al", "铝", "地壳中含量最高的金属元素，两性金属。", ColorTag::Slate),
    starter("fe", "Fe", "铁", "工业的脊梁，变价金属。", ColorTag::Orange),
    starter("cu", "Cu", "铜", "紫红色金属，优良的导电体。", ColorTag::Orange),
    starter("zn", "Zn", "锌", "青白色金属，常用于电池和镀层。", ColorTag::Slate),
    starter("ca", "Ca", "钙", "活泼金属，骨骼的主要成分。", ColorTag::Stone),
    starter("ba", "Ba", "钡", "黄绿色火焰反应，化合物多有毒。", ColorTag::Green),
    starter("ag", "Ag", "银", "最好的导电导热金属，用于镜子和首饰。", ColorTag::Slate),
];

/// The basic substances a new game starts with, all discovered at `now`.
pub fn starter_inventory(now: DateTime<Utc>) -> Vec<Substance> {
    STARTERS
        .iter()
        .map(|starter| Substance {
            id: SubstanceId::new(starter.id),
            symbol: starter.symbol.to_owned(),
            name: starter.name.to_owned(),
            description: starter.description.to_owned(),
            kind: SubstanceKind::Basic,
            color: starter.color,
            discovered_at: Some(now),
        })
        .collect()
}

pub fn find_starter_by_symbol(symbol: &str, now: DateTime<Utc>) -> Option<Substance> {
    starter_inventory(now)
        .into_iter()
        .find(|substance| substance.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{key::canonical_key, table::ReactionTable};

    #[test]
    fn starter_ids_and_symbols_are_unique() {
        let inventory = starter_inventory(Utc::now());
        assert_eq!(inventory.len(), 19);
        let ids: HashSet<_> = inventory.iter().map(|s| s.id.clone()).collect();
        let symbols: HashSet<_> = inventory.iter().map(|s| s.symbol.clone()).collect();
        assert_eq!(ids.len(), inventory.len());
        assert_eq!(symbols.len(), inventory.len());
    }

    #[test]
    fn starters_can_reach_the_table() {
        let now = Utc::now();
        let hydrogen = find_starter_by_symbol("H₂", now).expect("hydrogen");
        let oxygen = find_starter_by_symbol("O₂", now).expect("oxygen");
        let table = ReactionTable::builtin();
        assert!(table.contains(&canonical_key([hydrogen.symbol, oxygen.symbol])));
    }
}
