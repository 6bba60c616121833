//! Invoicing System - Multi-tenant Rendering Example
//!
//! This example renders the same invoicing queries for several tenants, each
//! on its own connection with its own engine and table prefix:
//! - Dashboard queries (open and overdue invoices)
//! - Invoice lifecycle writes (insert, mark paid, purge drafts)
//! - Prepared-statement form with native placeholders and a bind list
//! - Savepoint bookkeeping around a batch of writes
//!
//! Run with: cargo run --example invoicing

use oxide_query::{
    Column, Conditions, ConnectionRegistry, Delete, Dialect, DualSavepointStack, Expression,
    Insert, JoinType, OrderDirection, Result, Select, Table, TableReference, Update, Value,
    compile, flatten,
};

const CONNECTIONS: &str = r#"{
    "default": "acme",
    "connections": {
        "acme": { "kind": "postgres", "table_prefix": "acme_" },
        "globex": { "kind": "mysql", "table_prefix": "gx_" },
        "initech": { "kind": "sqlserver" }
    }
}"#;

// =============================================================================
// HELPERS TO PRINT SQL
// =============================================================================

fn print_sql(description: &str, sql: &str) {
    println!("-- {description}");
    println!("{sql};");
    println!();
}

fn print_prepared<D: Dialect + ?Sized>(description: &str, node: &Value, dialect: &D) -> Result<()> {
    let (sql, params) = flatten(node, dialect)?;
    println!("-- {description} (prepared)");
    println!("{sql};");
    println!("-- params: {params:?}");
    println!();
    Ok(())
}

// =============================================================================
// QUERIES
// =============================================================================

fn overdue_invoices(today: &str) -> Select {
    let from = TableReference::aliased(Table::new("invoices"), "i")
        .join_as(JoinType::Inner, Table::new("clients"), "c")
        .on(Conditions::predicate(
            Column::new("c.id"),
            "=",
            Column::new("i.client_id"),
        ));

    Select::new()
        .columns(&["i.invoice_number", "c.name", "i.total_cents", "i.due_date"])
        .from(from)
        .where_clause(
            Conditions::predicate(Column::new("i.status"), "=", "sent")
                .and(Column::new("i.due_date"), "<", today),
        )
        .order_by(Column::new("i.due_date"), OrderDirection::Asc)
}

fn revenue_by_currency(year: i64) -> Select {
    Select::new()
        .column(Column::new("currency"))
        .column_as(Expression::raw("SUM(total_cents)"), "revenue_cents")
        .from(Table::new("invoices"))
        .where_clause(
            Conditions::predicate(Column::new("status"), "=", "paid")
                .and_between(
                    Column::new("paid_at"),
                    format!("{year}-01-01"),
                    format!("{year}-12-31"),
                ),
        )
        .group_by(&["currency"])
        .having(Conditions::predicate(Expression::raw("SUM(total_cents)"), ">", 0))
        .order_by(Column::new("revenue_cents"), OrderDirection::Desc)
}

fn main() -> Result<()> {
    let registry = ConnectionRegistry::from_json(CONNECTIONS)?;

    println!("-- =============================================================================");
    println!("-- INVOICING SYSTEM - SQL PER TENANT");
    println!("-- =============================================================================");
    println!();

    for tenant in registry.names() {
        let dialect = registry.get(tenant)?;
        println!("-- Tenant {tenant} ({})", dialect.name());
        println!("-- -----------------");
        println!();

        // Dashboard
        let overdue = Value::from(overdue_invoices("2024-01-15"));
        print_sql("Overdue invoices", &compile(&overdue, dialect)?);
        print_prepared("Overdue invoices", &overdue, dialect)?;

        let revenue = Value::from(revenue_by_currency(2023));
        print_sql("Revenue by currency", &compile(&revenue, dialect)?);

        // Lifecycle writes
        let insert = Value::from(
            Insert::new(Table::new("invoices"))
                .columns(&["invoice_number", "client_id", "status", "total_cents", "currency"])
                .values([
                    Value::from("INV-0042"),
                    Value::from(7),
                    Value::from("draft"),
                    Value::from(125_000),
                    Value::from("EUR"),
                ]),
        );
        print_prepared("Create draft invoice", &insert, dialect)?;

        let mark_paid = Value::from(
            Update::new(Table::new("invoices"))
                .set("status", "paid")
                .set("paid_at", "2024-01-16")
                .where_clause(Conditions::predicate(
                    Column::new("invoice_number"),
                    "=",
                    "INV-0042",
                )),
        );
        print_sql("Mark invoice paid", &compile(&mark_paid, dialect)?);

        let purge = Value::from(Delete::new(Table::new("invoices")).where_clause(
            Conditions::predicate(Column::new("status"), "=", "draft").and_in(
                Column::new("client_id"),
                vec![Value::from(3), Value::from(9)],
            ),
        ));
        print_sql("Purge stale drafts", &compile(&purge, dialect)?);
    }

    // Savepoints around a batch of writes on one connection
    let mut savepoints = DualSavepointStack::new();
    savepoints.push("trans");
    for batch in ["batch_1", "batch_2"] {
        savepoints.push(batch);
        println!("-- SAVEPOINT {batch} at depth {:?}", savepoints.position(batch));
        savepoints.commit()?;
    }
    savepoints.pop()?;
    println!(
        "-- {} savepoints live, {} uncommitted",
        savepoints.len(),
        savepoints.uncommitted_count()
    );

    Ok(())
}
