//! Catalog Data
//!
//! The shop's fixed product and workshop lists, plus the category filter
//! used by the product grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    DiyKit,
    Gift,
    Seasonal,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::DiyKit => "DIY Kit",
            Category::Gift => "Gift",
            Category::Seasonal => "Seasonal",
        }
    }
}

/// Selected tab on the product grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in display order
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::DiyKit),
        CategoryFilter::Only(Category::Gift),
        CategoryFilter::Only(Category::Seasonal),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub name_cn: &'static str,
    /// Display string, e.g. "$25.00"
    pub price: &'static str,
    pub category: Category,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    pub id: u32,
    pub title: &'static str,
    pub title_cn: &'static str,
    pub description: &'static str,
    pub learn: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

/// Products matching `filter`, in catalog order
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| filter.admits(product.category))
        .collect()
}

pub static PRODUCTS: [Product; 8] = [
    Product {
        id: "1",
        name: "Cream Glue Phone Case Kit",
        name_cn: "奶油胶手机壳DIY",
        price: "$25.00",
        category: Category::DiyKit,
        image: "/images/products/phone-case.jpg",
    },
    Product {
        id: "2",
        name: "Traditional Fan Painting Set",
        name_cn: "团扇绘画套装",
        price: "$30.00",
        category: Category::DiyKit,
        image: "/images/products/fan.jpg",
    },
    Product {
        id: "3",
        name: "Chinese Jewelry Making Kit",
        name_cn: "古风首饰DIY",
        price: "$45.00",
        category: Category::DiyKit,
        image: "/images/products/jewelry.jpg",
    },
    Product {
        id: "4",
        name: "Plaster Figurine Paint Set",
        name_cn: "石膏娃娃彩绘",
        price: "$18.00",
        category: Category::DiyKit,
        image: "/images/products/plaster.jpg",
    },
    Product {
        id: "5",
        name: "Hand-painted Canvas Bag",
        name_cn: "手绘帆布袋",
        price: "$22.00",
        category: Category::Gift,
        image: "/images/products/bag.jpg",
    },
    Product {
        id: "6",
        name: "Aroma Stone Gift Set",
        name_cn: "香薰扩香石",
        price: "$35.00",
        category: Category::Gift,
        image: "/images/products/aroma.jpg",
    },
    Product {
        id: "7",
        name: "Mid-Autumn Lantern Kit",
        name_cn: "中秋花灯DIY",
        price: "$28.00",
        category: Category::Seasonal,
        image: "/images/products/lantern.jpg",
    },
    Product {
        id: "8",
        name: "CNY Couplet Writing Set",
        name_cn: "新春对联套装",
        price: "$20.00",
        category: Category::Seasonal,
        image: "/images/products/cny.jpg",
    },
];

pub static WORKSHOPS: [Workshop; 4] = [
    Workshop {
        id: 1,
        title: "Kids Creative Chinese Art",
        title_cn: "少儿创意国风美术",
        description: "A fun introduction to ink painting and paper crafts tailored for young minds.",
        learn: "Brush holding techniques, simple ink animals, paper cutting.",
        price: "$45 / session",
        duration: "90 mins",
        image: "/images/workshops/kids-class.jpg",
        tags: &["Ages 4-15", "Beginner"],
    },
    Workshop {
        id: 2,
        title: "Adult Tea & Ink Slow Living",
        title_cn: "成人茶墨慢生活",
        description: "Escape the city noise. Enjoy premium tea while learning the meditative art of calligraphy.",
        learn: "Tea tasting ceremony, basic calligraphy strokes, mindfulness.",
        price: "$65 / session",
        duration: "2 hours",
        image: "/images/workshops/tea-adult.jpg",
        tags: &["Adults", "Relaxation"],
    },
    Workshop {
        id: 3,
        title: "Outdoor Summer Sketching",
        title_cn: "夏季户外写生",
        description: "Connect with nature. We take our easels to the park for a breath of fresh air.",
        learn: "Landscape composition, observing nature, watercolor techniques.",
        price: "$50 / session",
        duration: "2 hours",
        image: "/images/workshops/outdoor-art.jpg",
        tags: &["Seasonal", "Outdoor"],
    },
    Workshop {
        id: 4,
        title: "College Pop-up & Team Building",
        title_cn: "高校快闪 & 团建",
        description: "Bring cultural creativity to your campus or office. Customizable crafts.",
        learn: "Team collaboration, creative expression, cultural history.",
        price: "Custom Pricing",
        duration: "2-4 hours",
        image: "/images/workshops/team-art.jpg",
        tags: &["Group", "Social"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(products: &[&Product]) -> Vec<&'static str> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_every_product_in_order() {
        let visible = filter_products(&PRODUCTS, CategoryFilter::All);
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_gift_returns_two_in_order() {
        let visible = filter_products(&PRODUCTS, CategoryFilter::Only(Category::Gift));
        assert_eq!(ids(&visible), vec!["5", "6"]);
    }

    #[test]
    fn test_each_category_partitions_catalog() {
        let total: usize = [Category::DiyKit, Category::Gift, Category::Seasonal]
            .into_iter()
            .map(|c| filter_products(&PRODUCTS, CategoryFilter::Only(c)).len())
            .sum();
        assert_eq!(total, PRODUCTS.len());
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let shuffled = [PRODUCTS[6].clone(), PRODUCTS[0].clone(), PRODUCTS[7].clone()];
        let visible = filter_products(&shuffled, CategoryFilter::Only(Category::Seasonal));
        assert_eq!(ids(&visible), vec!["7", "8"]);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = CategoryFilter::TABS.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["All", "DIY Kit", "Gift", "Seasonal"]);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_ids_unique() {
        let product_ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), PRODUCTS.len());
        let workshop_ids: HashSet<_> = WORKSHOPS.iter().map(|w| w.id).collect();
        assert_eq!(workshop_ids.len(), WORKSHOPS.len());
    }
}
