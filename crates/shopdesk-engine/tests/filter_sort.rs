use shopdesk_engine::{
    CustomerSort, Facet, OrderSort, ProductSort, Query, Record, ReturnSort, SellerSort, SortKey, facet_options,
    filter_sort,
};
use shopdesk_types::{Customer, Order, OrderStatus, Product, ReturnRequest, ReturnStatus, Seller};

fn product(name: &str, category: &str, price: f64, stock: u64) -> Product {
    Product {
        product_id: 0,
        name: name.to_string(),
        category: category.to_string(),
        price,
        quantityavailable: stock,
        seller_id: None,
        description: None,
        total_sold: 0,
        views: 0,
    }
}

fn fruit() -> Vec<Product> {
    vec![
        product("Apple", "Fruit", 50.0, 0),
        product("Banana", "Fruit", 10.0, 5),
        product("apple pie", "Bakery", 20.0, 2),
    ]
}

fn names<'a>(rows: &[&'a Product]) -> Vec<&'a str> {
    rows.iter().map(|p| p.name.as_str()).collect()
}

fn order(id: u64, customer: Option<&str>, status: OrderStatus, amount: f64) -> Order {
    Order {
        order_id: id,
        date: None,
        formatted_date: None,
        order_date: None,
        status,
        shipping_status: None,
        total_amount: amount,
        customer_id: None,
        customer_name: customer.map(str::to_string),
        customer_email: None,
        customer_phone: None,
        items: vec![],
    }
}

#[test]
fn test_search_is_case_insensitive_and_keeps_relative_order() {
    // Given: the three-product record set
    let records = fruit();
    let query = Query {
        search: "app".to_string(),
        ..Query::<ProductSort>::new()
    };

    // When
    let rows = filter_sort(&records, &query);

    // Then: the two apple products in record-set order under the default name sort
    assert_eq!(names(&rows), vec!["Apple", "apple pie"]);
}

#[test]
fn test_search_match_without_reordering() {
    let records = fruit();
    let query = Query {
        search: "APP".to_string(),
        facet: Facet::All,
        sort: ProductSort::PriceDesc,
    };

    let rows = filter_sort(&records, &query);

    assert_eq!(names(&rows), vec!["Apple", "apple pie"]);
}

#[test]
fn test_price_ascending() {
    let records = fruit();
    let query = Query {
        sort: ProductSort::PriceAsc,
        ..Query::new()
    };

    let rows = filter_sort(&records, &query);

    assert_eq!(names(&rows), vec!["Banana", "apple pie", "Apple"]);
}

#[test]
fn test_accented_names_sort_beside_their_base_letter() {
    let records = vec![
        product("Zara", "Fruit", 1.0, 1),
        product("Émile's jam", "Pantry", 1.0, 1),
        product("fig", "Fruit", 1.0, 1),
        product("éclair", "Bakery", 1.0, 1),
        product("Fred", "Pantry", 1.0, 1),
    ];
    let query = Query {
        sort: ProductSort::NameAsc,
        ..Query::new()
    };

    let rows = filter_sort(&records, &query);

    assert_eq!(names(&rows), vec!["éclair", "Émile's jam", "fig", "Fred", "Zara"]);
}

#[test]
fn test_category_facet_is_exact() {
    let records = fruit();
    let query = Query {
        facet: Facet::Only("Fruit".to_string()),
        sort: ProductSort::StockDesc,
        ..Query::new()
    };

    let rows = filter_sort(&records, &query);

    assert_eq!(names(&rows), vec!["Banana", "Apple"]);
    assert!(filter_sort(&records, &Query { facet: Facet::Only("fruit".into()), ..Query::<ProductSort>::new() }).is_empty());
}

#[test]
fn test_no_match_is_empty_not_error() {
    let records = fruit();
    let query = Query {
        search: "zzz".to_string(),
        ..Query::<ProductSort>::new()
    };
    assert!(filter_sort(&records, &query).is_empty());
}

#[test]
fn test_result_is_subset_and_idempotent_for_every_key() {
    let records = vec![
        product("pear", "Fruit", 12.0, 4),
        product("Pear", "Fruit", 12.0, 4),
        product("Fig", "Dried", 80.0, 0),
        product("fig", "Dried", 80.0, 9),
        product("Kiwi", "Fruit", 5.5, 4),
    ];

    for &sort in ProductSort::ALL {
        let query = Query {
            search: "i".to_string(),
            facet: Facet::All,
            sort,
        };
        let first = filter_sort(&records, &query);
        let second = filter_sort(&records, &query);

        assert!(first.iter().all(|row| records.iter().any(|r| std::ptr::eq(r, *row))));
        assert_eq!(
            first.iter().map(|r| *r as *const Product).collect::<Vec<_>>(),
            second.iter().map(|r| *r as *const Product).collect::<Vec<_>>(),
            "{:?} is not idempotent",
            sort
        );

        // sorting an already sorted sequence is a no-op
        let sorted: Vec<Product> = first.iter().map(|p| (*p).clone()).collect();
        let again = filter_sort(&sorted, &query);
        assert_eq!(names(&again), names(&first), "{:?} reorders sorted input", sort);
    }
}

#[test]
fn test_every_product_key_is_transitive() {
    let records = vec![
        product("b", "x", 3.0, 1),
        product("B", "X", 1.0, 3),
        product("a", "y", 2.0, 2),
        product("A", "Y", 2.0, 2),
    ];
    for &sort in ProductSort::ALL {
        for a in &records {
            for b in &records {
                for c in &records {
                    let ab = sort.compare(a, b);
                    let bc = sort.compare(b, c);
                    if ab == bc {
                        assert_eq!(sort.compare(a, c), ab, "{:?} not transitive", sort);
                    }
                }
            }
        }
    }
}

#[test]
fn test_orders_search_id_customer_and_status() {
    let records = vec![
        order(7, Some("Meera"), OrderStatus::Pending, 500.0),
        order(12, None, OrderStatus::Shipped, 900.0),
        order(3, Some("Dev"), OrderStatus::Delivered, 100.0),
    ];

    let by_id = filter_sort(&records, &Query { search: "#12".into(), ..Query::<OrderSort>::new() });
    let by_status = filter_sort(&records, &Query { search: "deliv".into(), ..Query::<OrderSort>::new() });
    let newest = filter_sort(&records, &Query::<OrderSort>::new());
    let pending = filter_sort(
        &records,
        &Query {
            facet: Facet::Only("Pending".into()),
            ..Query::<OrderSort>::new()
        },
    );

    assert_eq!(by_id[0].order_id, 12);
    assert_eq!(by_status[0].order_id, 3);
    assert_eq!(newest.iter().map(|o| o.order_id).collect::<Vec<_>>(), vec![12, 7, 3]);
    assert_eq!(pending.len(), 1);
}

#[test]
fn test_customers_state_facet_and_ranked_order() {
    let mut blocked: Customer = serde_json::from_value(serde_json::json!({"customer_id": 1, "name": "Zoya", "email": "z@x.in"})).unwrap();
    blocked.blocked = true;
    let active: Customer = serde_json::from_value(serde_json::json!({"customer_id": 2, "name": "Arun", "email": "arun@x.in", "total_spent": 10})).unwrap();
    let records = vec![blocked, active];

    let ranked = filter_sort(&records, &Query::<CustomerSort>::new());
    let only_active = filter_sort(&records, &Query { facet: Facet::Only("Active".into()), ..Query::<CustomerSort>::new() });
    let by_email = filter_sort(&records, &Query { search: "ARUN@".into(), ..Query::<CustomerSort>::new() });

    assert_eq!(ranked.iter().map(|c| c.customer_id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(only_active[0].customer_id, 2);
    assert_eq!(by_email.len(), 1);
}

#[test]
fn test_sellers_ignore_facet() {
    let records = vec![
        Seller { id: 1, name: "Kiran".into(), company: "Zen Traders".into(), email: "k@z.in".into(), phone: "1".into() },
        Seller { id: 2, name: "Bala".into(), company: "Acme".into(), email: "b@a.in".into(), phone: "2".into() },
    ];
    let query = Query {
        facet: Facet::Only("anything".into()),
        sort: SellerSort::Company,
        ..Query::new()
    };
    let rows = filter_sort(&records, &query);
    assert_eq!(rows.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
    assert!(records[0].facet().is_none());
}

#[test]
fn test_returns_status_facet_and_refund_sort() {
    let make = |id: u64, status: ReturnStatus, refund: f64| ReturnRequest {
        id,
        order_id: id * 10,
        product_id: None,
        customer_name: "Isha".into(),
        product_name: "Lamp".into(),
        reason: "Damaged".into(),
        status,
        refund_amount: refund,
    };
    let records = vec![
        make(1, ReturnStatus::Requested, 100.0),
        make(2, ReturnStatus::Approved, 300.0),
        make(3, ReturnStatus::Requested, 200.0),
    ];

    let query = Query {
        search: "damag".into(),
        facet: Facet::Only("Requested".into()),
        sort: ReturnSort::RefundDesc,
    };
    let rows = filter_sort(&records, &query);

    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
}

#[test]
fn test_facet_options_first_seen_order() {
    let records = vec![
        product("a", "Toys", 1.0, 1),
        product("b", "Books", 1.0, 1),
        product("c", "Toys", 1.0, 1),
        product("d", "", 1.0, 1),
    ];
    insta::assert_debug_snapshot!(facet_options(&records), @r#"
    [
        "Toys",
        "Books",
    ]
    "#);
}

#[test]
fn test_sort_keys_cycle() {
    assert_eq!(ProductSort::Category.cycle(), ProductSort::NameAsc);
    assert_eq!(OrderSort::Newest.cycle(), OrderSort::Oldest);
}
