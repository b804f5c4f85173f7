use shared::domain::{ColorTag, ReactionDetails, SubstanceKind};

use crate::table::{ProductTemplate, ReactionTemplate};

pub(crate) struct AuthoredProduct {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: SubstanceKind,
    pub color: ColorTag,
}

pub(crate) struct AuthoredReaction {
    pub reactants: &'static [&'static str],
    pub product: AuthoredProduct,
    pub message: &'static str,
    pub equation: &'static str,
    pub reaction_kind: &'static str,
    pub phenomenon: &'static str,
    pub fact: &'static str,
}

impl AuthoredReaction {
    pub(crate) fn to_template(&self) -> ReactionTemplate {
        ReactionTemplate {
            reactants: self.reactants.iter().map(|s| (*s).to_owned()).collect(),
            product: ProductTemplate {
                symbol: self.product.symbol.to_owned(),
                name: self.product.name.to_owned(),
                description: self.product.description.to_owned(),
                kind: self.product.kind,
                color: self.product.color,
            },
            message: self.message.to_owned(),
            details: ReactionDetails {
                equation: Some(self.equation.to_owned()),
                reaction_kind: Some(self.reaction_kind.to_owned()),
                phenomenon: Some(self.phenomenon.to_owned()),
                fact: Some(self.fact.to_owned()),
            },
        }
    }
}

pub(crate) static BUILTIN_REACTIONS: &[AuthoredReaction] = &[
    // Basic Oxides
    AuthoredReaction {
        reactants: &["H₂", "O₂"],
        product: AuthoredProduct {
            symbol: "H₂O",
            name: "水",
            description: "生命之源，万能溶剂。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Blue,
        },
        message: "氢气在氧气中燃烧，产生淡蓝色火焰，杯壁有水珠。",
        equation: "2H₂ + O₂ →(点燃) 2H₂O",
        reaction_kind: "化合反应",
        phenomenon: "产生淡蓝色火焰，放出大量热",
        fact: "氢气是密度最小的气体，燃烧产物只有水，是最清洁的能源。",
    },
    AuthoredReaction {
        reactants: &["C", "O₂"],
        product: AuthoredProduct {
            symbol: "CO₂",
            name: "二氧化碳",
            description: "造成温室效应的主要气体，可用于灭火。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "碳在氧气中剧烈燃烧，发出白光。",
        equation: "C + O₂ →(点燃) CO₂",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，发出白光，生成能使澄清石灰水变浑浊的气体",
        fact: "干冰是固态的二氧化碳，常用于人工降雨和舞台烟雾。",
    },
    AuthoredReaction {
        reactants: &["Mg", "O₂"],
        product: AuthoredProduct {
            symbol: "MgO",
            name: "氧化镁",
            description: "白色粉末，熔点极高，可作耐火材料。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Stone,
        },
        message: "镁条在空气中剧烈燃烧，发出耀眼白光。",
        equation: "2Mg + O₂ →(点燃) 2MgO",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，发出耀眼白光，生成白色固体",
        fact: "镁燃烧发出的光可用于制造照明弹和闪光灯。",
    },
    AuthoredReaction {
        reactants: &["Fe", "O₂"],
        product: AuthoredProduct {
            symbol: "Fe₃O₄",
            name: "四氧化三铁",
            description: "黑色固体，具有磁性，俗称磁性氧化铁。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "铁丝在氧气中剧烈燃烧，火星四射。",
        equation: "3Fe + 2O₂ →(点燃) Fe₃O₄",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，火星四射，生成黑色固体",
        fact: "实验时需在瓶底留少量水或细沙，防止溅落的熔化物炸裂瓶底。",
    },
    AuthoredReaction {
        reactants: &["Cu", "O₂"],
        product: AuthoredProduct {
            symbol: "CuO",
            name: "氧化铜",
            description: "黑色固体，不溶于水。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "红色铜丝加热后变黑。",
        equation: "2Cu + O₂ →(△) 2CuO",
        reaction_kind: "化合反应",
        phenomenon: "红色固体表面变黑",
        fact: "氧化铜可作为催化剂，或用于制造玻璃、陶瓷的颜料。",
    },
    AuthoredReaction {
        reactants: &["Al", "O₂"],
        product: AuthoredProduct {
            symbol: "Al₂O₃",
            name: "氧化铝",
            description: "白色固体，硬度大，刚玉的主要成分。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Stone,
        },
        message: "铝表面形成致密的氧化膜。",
        equation: "4Al + 3O₂ → 2Al₂O₃",
        reaction_kind: "化合反应",
        phenomenon: "铝熔化但不滴落（表面氧化膜熔点高）",
        fact: "致密的氧化铝薄膜能保护内部金属铝不被继续氧化（钝化）。",
    },
    AuthoredReaction {
        reactants: &["Na", "O₂"],
        product: AuthoredProduct {
            symbol: "Na₂O₂",
            name: "过氧化钠",
            description: "淡黄色固体，可用作供氧剂。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Yellow,
        },
        message: "钠在空气中加热，剧烈燃烧。",
        equation: "2Na + O₂ →(△) Na₂O₂",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，发出黄色火焰，生成淡黄色固体",
        fact: "过氧化钠与水或CO₂反应都能生成氧气，是潜水艇中的供氧剂。",
    },
    AuthoredReaction {
        reactants: &["O₂", "P"],
        product: AuthoredProduct {
            symbol: "P₂O₅",
            name: "五氧化二磷",
            description: "白色粉末，极强吸水性。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Stone,
        },
        message: "磷剧烈燃烧，产生大量白烟。",
        equation: "4P + 5O₂ →(点燃) 2P₂O₅",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，产生大量白烟",
        fact: "实验室常用红磷燃烧来测定空气中氧气的含量。",
    },
    AuthoredReaction {
        reactants: &["O₂", "S"],
        product: AuthoredProduct {
            symbol: "SO₂",
            name: "二氧化硫",
            description: "有刺激性气味的气体，形成酸雨的主要原因。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "硫在氧气中燃烧，发出明亮的蓝紫色火焰。",
        equation: "S + O₂ →(点燃) SO₂",
        reaction_kind: "化合反应",
        phenomenon: "发出明亮的蓝紫色火焰，有刺激性气味气体生成",
        fact: "二氧化硫具有漂白性，能使品红溶液褪色（加热后恢复红色）。",
    },
    AuthoredReaction {
        reactants: &["O₂", "Si"],
        product: AuthoredProduct {
            symbol: "SiO₂",
            name: "二氧化硅",
            description: "沙子、石英、光导纤维的主要成分。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Stone,
        },
        message: "硅在氧气中高温反应生成二氧化硅。",
        equation: "Si + O₂ →(△) SiO₂",
        reaction_kind: "化合反应",
        phenomenon: "固体逐渐反应",
        fact: "SiO₂是酸性氧化物，但不溶于水，它是制作光导纤维的核心原料。",
    },
    AuthoredReaction {
        reactants: &["N₂", "O₂"],
        product: AuthoredProduct {
            symbol: "NO",
            name: "一氧化氮",
            description: "无色有毒气体，信使分子。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "在放电或高温条件下反应。",
        equation: "N₂ + O₂ →(放电) 2NO",
        reaction_kind: "化合反应",
        phenomenon: "伴随闪电或电火花产生",
        fact: "这是自然界“雷雨发庄稼”过程的第一步（固氮）。",
    },
    // Chlorides & Halogens
    AuthoredReaction {
        reactants: &["Cl₂", "Na"],
        product: AuthoredProduct {
            symbol: "NaCl",
            name: "氯化钠",
            description: "食盐的主要成分，白色晶体。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "钠在氯气中剧烈燃烧，产生大量白烟。",
        equation: "2Na + Cl₂ →(点燃) 2NaCl",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，发出黄色火焰，产生大量白烟",
        fact: "钠离子维持细胞外液渗透压，氯离子维持酸碱平衡。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "K"],
        product: AuthoredProduct {
            symbol: "KCl",
            name: "氯化钾",
            description: "白色晶体，常用钾肥。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "钾在氯气中剧烈燃烧。",
        equation: "2K + Cl₂ →(点燃) 2KCl",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，透过蓝色钴玻璃看是紫色火焰，产生白烟",
        fact: "钾盐均易溶于水，氯化钾是重要的农用钾肥。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "Fe"],
        product: AuthoredProduct {
            symbol: "FeCl₃",
            name: "氯化铁",
            description: "棕黑色晶体，水溶液呈黄色。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Orange,
        },
        message: "铁丝在氯气中燃烧，产生棕红色的烟。",
        equation: "2Fe + 3Cl₂ →(点燃) 2FeCl₃",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，产生棕红色的烟",
        fact: "氯气具有强氧化性，能将变价金属（如Fe）氧化到最高价态（+3价）。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "Cu"],
        product: AuthoredProduct {
            symbol: "CuCl₂",
            name: "氯化铜",
            description: "棕黄色的烟，溶于水后溶液呈蓝色（稀）或绿色（浓）。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Green,
        },
        message: "铜丝在氯气中燃烧，产生棕黄色的烟。",
        equation: "Cu + Cl₂ →(点燃) CuCl₂",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，产生棕黄色的烟",
        fact: "铜的焰色反应为绿色。",
    },
    AuthoredReaction {
        reactants: &["Al", "Cl₂"],
        product: AuthoredProduct {
            symbol: "AlCl₃",
            name: "氯化铝",
            description: "白色固体，共价化合物。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "铝粉在氯气中燃烧。",
        equation: "2Al + 3Cl₂ →(点燃) 2AlCl₃",
        reaction_kind: "化合反应",
        phenomenon: "剧烈燃烧，产生白烟",
        fact: "AlCl₃是共价化合物而非离子化合物，熔融状态不导电。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "P"],
        product: AuthoredProduct {
            symbol: "PCl₃",
            name: "三氯化磷",
            description: "无色发烟液体，剧毒。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "磷在氯气中燃烧。",
        equation: "2P + 3Cl₂ →(点燃) 2PCl₃",
        reaction_kind: "化合反应",
        phenomenon: "产生白色烟雾（PCl3是雾，PCl5是烟）",
        fact: "若氯气过量，会生成PCl₅（五氯化磷）。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "H₂"],
        product: AuthoredProduct {
            symbol: "HCl",
            name: "氯化氢",
            description: "无色有刺激性气味气体，极易溶于水形成盐酸。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "氢气在氯气中燃烧，发出苍白色火焰。",
        equation: "H₂ + Cl₂ →(点燃) 2HCl",
        reaction_kind: "化合反应",
        phenomenon: "苍白色火焰，瓶口有白雾",
        fact: "工业上用氢气在氯气中燃烧来制备盐酸。",
    },
    AuthoredReaction {
        reactants: &["H₂", "I₂"],
        product: AuthoredProduct {
            symbol: "HI",
            name: "碘化氢",
            description: "无色气体，强酸性，不稳定。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Purple,
        },
        message: "持续加热才能缓慢反应。",
        equation: "H₂ + I₂ ⇌(△) 2HI",
        reaction_kind: "化合反应 / 可逆反应",
        phenomenon: "碘蒸气逐渐减少",
        fact: "碘化氢很不稳定，受热易分解，体现卤素非金属性的递变规律。",
    },
    AuthoredReaction {
        reactants: &["Al", "I₂"],
        product: AuthoredProduct {
            symbol: "AlI₃",
            name: "碘化铝",
            description: "强路易斯酸，有机合成催化剂。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Purple,
        },
        message: "滴水生烟，剧烈放热。",
        equation: "2Al + 3I₂ →(H₂O) 2AlI₃",
        reaction_kind: "化合反应",
        phenomenon: "混合物剧烈反应，产生紫色碘蒸气和棕色烟雾",
        fact: "水在此反应中起催化剂作用，引发铝和碘的剧烈放热反应。",
    },
    // Reactions with Water
    AuthoredReaction {
        reactants: &["H₂O", "Na"],
        product: AuthoredProduct {
            symbol: "NaOH",
            name: "氢氧化钠",
            description: "俗称烧碱、火碱，强腐蚀性。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "钠浮在水面上，熔成小球，四处游动。",
        equation: "2Na + 2H₂O → 2NaOH + H₂↑",
        reaction_kind: "置换反应",
        phenomenon: "浮、熔、游、响、红（遇酚酞）",
        fact: "实验室处理废钠时，通常将其放入乙醇中，因为乙醇与钠反应较缓和。",
    },
    AuthoredReaction {
        reactants: &["H₂O", "K"],
        product: AuthoredProduct {
            symbol: "KOH",
            name: "氢氧化钾",
            description: "强碱，性质与氢氧化钠相似但更活泼。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "钾与水剧烈反应，甚至发生轻微爆炸。",
        equation: "2K + 2H₂O → 2KOH + H₂↑",
        reaction_kind: "置换反应",
        phenomenon: "剧烈反应，产生的氢气可能被点燃（紫色火焰）",
        fact: "钾比钠的金属性更强，反应更剧烈。",
    },
    AuthoredReaction {
        reactants: &["Ca", "H₂O"],
        product: AuthoredProduct {
            symbol: "Ca(OH)₂",
            name: "氢氧化钙",
            description: "熟石灰，其水溶液为澄清石灰水。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "钙与水反应，生成微溶于水的白色物质。",
        equation: "Ca + 2H₂O → Ca(OH)₂ + H₂↑",
        reaction_kind: "置换反应",
        phenomenon: "反应比较剧烈，溶液变浑浊",
        fact: "澄清石灰水用于检验二氧化碳，反应生成碳酸钙沉淀。",
    },
    AuthoredReaction {
        reactants: &["Cl₂", "H₂O"],
        product: AuthoredProduct {
            symbol: "HClO",
            name: "次氯酸",
            description: "具有强氧化性和漂白性，不稳定。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Cyan,
        },
        message: "氯气溶于水，部分反应。",
        equation: "Cl₂ + H₂O ⇌ HCl + HClO",
        reaction_kind: "歧化反应",
        phenomenon: "黄绿色气体溶解，溶液呈浅黄绿色",
        fact: "氯水具有漂白性是因为含有HClO，久置氯水会变成稀盐酸。",
    },
    AuthoredReaction {
        reactants: &["H₂O", "NO₂"],
        product: AuthoredProduct {
            symbol: "HNO₃",
            name: "硝酸",
            description: "强氧化性酸。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Blue,
        },
        message: "红棕色气体溶于水，变为无色。",
        equation: "3NO₂ + H₂O → 2HNO₃ + NO",
        reaction_kind: "歧化反应",
        phenomenon: "红棕色褪去，溶液呈酸性",
        fact: "工业制硝酸的重要步骤，尾气中的NO需进一步氧化处理。",
    },
    AuthoredReaction {
        reactants: &["H₂O", "SO₃"],
        product: AuthoredProduct {
            symbol: "H₂SO₄",
            name: "硫酸",
            description: "强酸，工业之母。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "三氧化硫剧烈溶于水放出大量热。",
        equation: "SO₃ + H₂O → H₂SO₄",
        reaction_kind: "化合反应",
        phenomenon: "放出大量热",
        fact: "工业上用98.3%的浓硫酸吸收SO₃来制备硫酸，防止形成酸雾。",
    },
    AuthoredReaction {
        reactants: &["H₂O", "Na₂O₂"],
        product: AuthoredProduct {
            symbol: "O₂",
            name: "氧气",
            description: "该反应常用于潜水艇供氧。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Blue,
        },
        message: "过氧化钠遇水释放氧气。",
        equation: "2Na₂O₂ + 2H₂O → 4NaOH + O₂↑",
        reaction_kind: "歧化反应",
        phenomenon: "产生气泡，放热，加酚酞先变红后褪色（HClO或强氧化性影响）",
        fact: "过氧化钠中氧元素为-1价，既是氧化剂也是还原剂。",
    },
    // Industrial & High Temp
    AuthoredReaction {
        reactants: &["Al", "Fe₂O₃"],
        product: AuthoredProduct {
            symbol: "Fe(l)",
            name: "液态铁",
            description: "熔融状态的铁，可用于焊接钢轨。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Orange,
        },
        message: "铝热反应，放出巨大的热量。",
        equation: "2Al + Fe₂O₃ →(高温) 2Fe + Al₂O₃",
        reaction_kind: "置换反应",
        phenomenon: "剧烈反应，发出耀眼强光，有熔融物生成",
        fact: "铝热反应利用了铝的强还原性和反应放出的高热，可用于冶炼高熔点金属。",
    },
    AuthoredReaction {
        reactants: &["Fe", "S"],
        product: AuthoredProduct {
            symbol: "FeS",
            name: "硫化亚铁",
            description: "黑色固体，不溶于水。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "混合粉末加热后剧烈反应，保持红热。",
        equation: "Fe + S →(△) FeS",
        reaction_kind: "化合反应",
        phenomenon: "剧烈反应，发光放热，生成黑色固体",
        fact: "硫的氧化性较弱，只能将铁氧化成+2价。",
    },
    AuthoredReaction {
        reactants: &["Cu", "S"],
        product: AuthoredProduct {
            symbol: "Cu₂S",
            name: "硫化亚铜",
            description: "黑色固体。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "铜在硫蒸气中燃烧。",
        equation: "2Cu + S →(△) Cu₂S",
        reaction_kind: "化合反应",
        phenomenon: "生成黑色固体",
        fact: "硫氧化性弱，将铜氧化为+1价的亚铜。",
    },
    AuthoredReaction {
        reactants: &["Ag", "S"],
        product: AuthoredProduct {
            symbol: "Ag₂S",
            name: "硫化银",
            description: "黑色固体，银器变黑的主要原因。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "银器表面变黑。",
        equation: "2Ag + S → Ag₂S",
        reaction_kind: "化合反应",
        phenomenon: "银表面变黑",
        fact: "银与空气中的微量H₂S反应也会生成Ag₂S，导致银饰变黑。",
    },
    AuthoredReaction {
        reactants: &["H₂", "N₂"],
        product: AuthoredProduct {
            symbol: "NH₃",
            name: "氨气",
            description: "无色有刺激性气味气体，极易溶于水。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Blue,
        },
        message: "工业合成氨反应。",
        equation: "N₂ + 3H₂ ⇌(高温高压催化剂) 2NH₃",
        reaction_kind: "化合反应 / 可逆反应",
        phenomenon: "无明显现象（需特定条件）",
        fact: "合成氨工业是人类解决粮食问题的重要里程碑（制造化肥）。",
    },
    AuthoredReaction {
        reactants: &["C", "H₂O"],
        product: AuthoredProduct {
            symbol: "CO+H₂",
            name: "水煤气",
            description: "一氧化碳和氢气的混合气体，重要燃料。",
            kind: SubstanceKind::Dangerous,
            color: ColorTag::Slate,
        },
        message: "高温下碳与水蒸气反应。",
        equation: "C + H₂O(g) →(高温) CO + H₂",
        reaction_kind: "置换反应",
        phenomenon: "无明显现象（高温密闭容器中）",
        fact: "水煤气有毒（含CO），但在工业上是重要的合成原料。",
    },
    AuthoredReaction {
        reactants: &["C", "SiO₂"],
        product: AuthoredProduct {
            symbol: "Si",
            name: "硅",
            description: "粗硅，需提纯后用于半导体。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Stone,
        },
        message: "工业制粗硅。",
        equation: "SiO₂ + 2C →(高温) Si + 2CO↑",
        reaction_kind: "置换反应",
        phenomenon: "高温反应",
        fact: "碳在高温下还原二氧化硅，生成粗硅和一氧化碳。",
    },
    AuthoredReaction {
        reactants: &["C", "CuO"],
        product: AuthoredProduct {
            symbol: "Cu",
            name: "铜",
            description: "紫红色金属。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Orange,
        },
        message: "木炭还原氧化铜。",
        equation: "C + 2CuO →(高温) 2Cu + CO₂↑",
        reaction_kind: "置换反应",
        phenomenon: "黑色粉末逐渐变成红色，生成气体使石灰水变浑浊",
        fact: "这是古代冶炼铜的方法之一。",
    },
    AuthoredReaction {
        reactants: &["CuO", "H₂"],
        product: AuthoredProduct {
            symbol: "Cu",
            name: "铜",
            description: "紫红色金属。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Orange,
        },
        message: "氢气还原氧化铜。",
        equation: "H₂ + CuO →(△) Cu + H₂O",
        reaction_kind: "置换反应",
        phenomenon: "黑色粉末变红，试管口有水珠",
        fact: "实验开始时要先通氢气排空气，实验结束时要继续通氢气直到冷却，防止铜被氧化。",
    },
    // Acids, Bases & Compounds
    AuthoredReaction {
        reactants: &["HCl", "NH₃"],
        product: AuthoredProduct {
            symbol: "NH₄Cl",
            name: "氯化铵",
            description: "白色固体，常用氮肥。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "两气体相遇，产生白烟。",
        equation: "NH₃ + HCl → NH₄Cl",
        reaction_kind: "化合反应",
        phenomenon: "产生大量白烟",
        fact: "这是检验氨气或氯化氢气体的常用方法（挥发性酸与碱反应）。",
    },
    AuthoredReaction {
        reactants: &["HCl", "Zn"],
        product: AuthoredProduct {
            symbol: "H₂",
            name: "氢气",
            description: "实验室制取氢气。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Cyan,
        },
        message: "锌粒在酸中溶解，产生气泡。",
        equation: "Zn + 2HCl → ZnCl₂ + H₂↑",
        reaction_kind: "置换反应",
        phenomenon: "锌粒溶解，产生无色气泡",
        fact: "实验室通常用锌和稀硫酸反应制氢气，而不用盐酸（避免HCl挥发混入）。",
    },
    AuthoredReaction {
        reactants: &["HCl", "Fe"],
        product: AuthoredProduct {
            symbol: "FeCl₂",
            name: "氯化亚铁",
            description: "浅绿色溶液。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Green,
        },
        message: "铁与盐酸反应。",
        equation: "Fe + 2HCl → FeCl₂ + H₂↑",
        reaction_kind: "置换反应",
        phenomenon: "产生气泡，溶液由无色变为浅绿色",
        fact: "铁与非氧化性酸（HCl, 稀H₂SO₄）反应生成亚铁盐。",
    },
    AuthoredReaction {
        reactants: &["HCl", "NaOH"],
        product: AuthoredProduct {
            symbol: "NaCl(aq)",
            name: "氯化钠水溶液",
            description: "盐水。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Blue,
        },
        message: "酸碱中和反应。",
        equation: "HCl + NaOH → NaCl + H₂O",
        reaction_kind: "复分解反应 / 中和反应",
        phenomenon: "放热，无明显颜色变化（除非有指示剂）",
        fact: "中和反应的实质是H⁺ + OH⁻ = H₂O，反应放出热量。",
    },
    AuthoredReaction {
        reactants: &["CuSO₄", "Fe"],
        product: AuthoredProduct {
            symbol: "Cu",
            name: "铜",
            description: "湿法炼铜。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Orange,
        },
        message: "铁钉表面覆盖红色物质。",
        equation: "Fe + CuSO₄ → FeSO₄ + Cu",
        reaction_kind: "置换反应",
        phenomenon: "铁表面有红色物质析出，溶液由蓝色变为浅绿色",
        fact: "古代“曾青得铁则化为铜”即指此反应。",
    },
    AuthoredReaction {
        reactants: &["CuSO₄", "Zn"],
        product: AuthoredProduct {
            symbol: "Cu",
            name: "铜",
            description: "紫红色金属。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Orange,
        },
        message: "锌置换铜。",
        equation: "Zn + CuSO₄ → ZnSO₄ + Cu",
        reaction_kind: "置换反应",
        phenomenon: "锌表面析出红色固体，溶液蓝色变浅",
        fact: "锌比铁更活泼，置换反应速率更快。",
    },
    AuthoredReaction {
        reactants: &["AgNO₃", "Cu"],
        product: AuthoredProduct {
            symbol: "Ag",
            name: "银",
            description: "置换出银。",
            kind: SubstanceKind::Basic,
            color: ColorTag::Slate,
        },
        message: "铜表面析出银白色晶体。",
        equation: "Cu + 2AgNO₃ → Cu(NO₃)₂ + 2Ag",
        reaction_kind: "置换反应",
        phenomenon: "铜表面析出银白色固体，溶液由无色变为蓝色",
        fact: "利用金属活动性顺序：Cu > Ag。",
    },
    AuthoredReaction {
        reactants: &["CO₂", "Ca(OH)₂"],
        product: AuthoredProduct {
            symbol: "CaCO₃",
            name: "碳酸钙",
            description: "大理石、石灰石主要成分。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Stone,
        },
        message: "澄清石灰水变浑浊。",
        equation: "Ca(OH)₂ + CO₂ → CaCO₃↓ + H₂O",
        reaction_kind: "复分解反应（广义）",
        phenomenon: "溶液变浑浊，生成白色沉淀",
        fact: "该反应不仅用于检验CO₂，也是粉刷墙壁后墙壁变硬的原因。",
    },
    // Atmosphere and other reactions
    AuthoredReaction {
        reactants: &["NO", "O₂"],
        product: AuthoredProduct {
            symbol: "NO₂",
            name: "二氧化氮",
            description: "红棕色有毒气体。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Orange,
        },
        message: "无色气体变为红棕色。",
        equation: "2NO + O₂ → 2NO₂",
        reaction_kind: "化合反应",
        phenomenon: "无色气体迅速变为红棕色",
        fact: "这是雷雨天产生氮肥的重要一步，也是光化学烟雾的成因之一。",
    },
    AuthoredReaction {
        reactants: &["O₂", "SO₂"],
        product: AuthoredProduct {
            symbol: "SO₃",
            name: "三氧化硫",
            description: "无色固体（标况下），硫酸工业中间体。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "二氧化硫催化氧化。",
        equation: "2SO₂ + O₂ ⇌(催化剂) 2SO₃",
        reaction_kind: "化合反应",
        phenomenon: "无明显现象（需催化剂加热）",
        fact: "该反应是可逆反应，也是接触法制硫酸的关键步骤。",
    },
    AuthoredReaction {
        reactants: &["H₂O", "SO₂"],
        product: AuthoredProduct {
            symbol: "H₂SO₃",
            name: "亚硫酸",
            description: "不稳定的弱酸，易被氧化。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Slate,
        },
        message: "二氧化硫溶于水形成酸。",
        equation: "SO₂ + H₂O ⇌ H₂SO₃",
        reaction_kind: "化合反应",
        phenomenon: "气体溶解",
        fact: "亚硫酸是酸雨的主要成分之一，它会被空气中的氧气进一步氧化为硫酸。",
    },
    AuthoredReaction {
        reactants: &["Mg", "N₂"],
        product: AuthoredProduct {
            symbol: "Mg₃N₂",
            name: "氮化镁",
            description: "淡黄色固体。",
            kind: SubstanceKind::Compound,
            color: ColorTag::Yellow,
        },
        message: "镁在氮气中燃烧。",
        equation: "3Mg + N₂ →(点燃) Mg₃N₂",
        reaction_kind: "化合反应",
        phenomenon: "发出耀眼白光（不如氧气中剧烈），生成淡黄色固体",
        fact: "镁条在空气中燃烧，产物不仅有MgO，还有少量的Mg₃N₂。",
    },
];
